#[derive(Debug, Clone)]
pub enum Message {
    // === ATTENDANCE MESSAGES ===
    AttendanceRecorded(String),        // place
    AttendanceAlreadyRecorded(String), // place
    AttendanceRecordFailed(String),    // error
    NoMatchingNetwork(String),         // ssid

    // === PROBE MESSAGES ===
    SsidDetected(String),    // ssid
    SsidProbeFailed(String), // error

    // === COMMAND MESSAGES ===
    CommandLaunched(String),             // command line
    CommandLaunchFailed(String, String), // command line, error
    CommandLineEmpty,

    // === REPORT MESSAGES ===
    MonthlyReportTitle(String), // month/year
    MonthlyReportTotal(usize),  // event count

    // === GENERAL MESSAGES ===
    Version(String), // version string
}
