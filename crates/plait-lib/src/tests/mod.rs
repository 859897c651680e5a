//! Grammar-level scenarios: a small PHP dialect and recursive rule shapes.
