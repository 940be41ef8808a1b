//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and analytics panels while reading and
//! writing shared state from Leptos context providers.

pub mod best_scenario_results;
pub mod charging_stations;
pub mod edit_variables_drawer;
pub mod header;
pub mod layout;
pub mod performance_indicators;
pub mod protected_route;
pub mod sidebar;
pub mod unsatisfied_demand;
