use serde::Serialize;

#[derive(Serialize)]
pub struct MemoryUsage {
    pub physical_mem: u64,
    pub virtual_mem: u64,
}

#[tauri::command]
pub fn get_memory_usage() -> MemoryUsage {
    let stats = memory_stats::memory_stats();

    MemoryUsage {
        physical_mem: stats.map(|s| s.physical_mem as u64).unwrap_or(0),
        virtual_mem: stats.map(|s| s.virtual_mem as u64).unwrap_or(0),
    }
}

#[tauri::command]
pub fn exit_app() {
    std::process::exit(0);
}
