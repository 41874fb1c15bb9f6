use crate::libs::messages::Message;
use crate::libs::report::MonthlyReport;
use crate::msg_print;

pub struct View {}

impl View {
    /// Prints the monthly report: one `date - place` line per event,
    /// followed by the total count.
    pub fn monthly(report: &MonthlyReport, month_label: &str) {
        msg_print!(Message::MonthlyReportTitle(month_label.to_string()));
        for record in &report.records {
            println!("{} - {}", record.date.format("%Y-%m-%d"), record.place);
        }
        msg_print!(Message::MonthlyReportTotal(report.count), true);
    }
}
