//! `sqlflow-model drivers` – list the built-in storage drivers.

use sqlflow_model_core::DriverRegistry;

/// One line per registered driver name, sorted.
pub fn driver_lines(registry: &DriverRegistry) -> Vec<String> {
    registry.names().into_iter().map(str::to_string).collect()
}

/// Print the built-in driver names, one per line.
pub fn run_drivers() {
    for line in driver_lines(&DriverRegistry::builtin()) {
        println!("{line}");
    }
}
