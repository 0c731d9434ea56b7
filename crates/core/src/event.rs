/// All messages (events) that can flow through the application event bus.
///
/// Sources:
/// - Sampler task          → `Sample`
/// - Terminal input stream → `Resized`, `LaunchMonitor`, `Shutdown`
/// - Config watcher task   → `ConfigReloaded`
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Fresh CPU utilization sample in `[0.0, 1.0]` from the sampler task.
    Sample(f32),

    /// Terminal was resized — carries the new total column count.
    /// The ring follows the drawing area's inner width.
    Resized(u16),

    /// Config file changed on disk — triggers a live reload.
    ConfigReloaded,

    /// User clicked the graph — launch the external task manager.
    LaunchMonitor,

    /// Graceful shutdown requested.
    Shutdown,
}
