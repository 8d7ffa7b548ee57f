use std::backtrace::Backtrace;

pub struct QueryFailureReport<'a> {
    pub sql: &'a str,
    pub params: &'a str,
    pub class: &'static str,
    pub message: String,
    pub trace: Backtrace,
}
