//! # 美化输出工具
//!
//! 终端上的状态行、标题、小节、键值行和匹配标签都从这里输出，
//! 错误走 stderr，其余走 stdout。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块和 `main.rs` 使用
//! - 使用 `colored` crate

use crate::models::{FitTag, Tone};

use colored::{ColoredString, Colorize};

/// 标题与分隔线宽度
const RULE_WIDTH: usize = 60;

/// 状态行类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Success,
    Error,
    Warning,
    Info,
}

impl Status {
    fn tag(self) -> &'static str {
        match self {
            Status::Success => "[OK]",
            Status::Error => "[ERR]",
            Status::Warning => "[WARN]",
            Status::Info => "[*]",
        }
    }

    fn prefix(self) -> ColoredString {
        let tag = self.tag();
        match self {
            Status::Success => tag.green().bold(),
            Status::Error => tag.red().bold(),
            Status::Warning => tag.yellow().bold(),
            Status::Info => tag.blue().bold(),
        }
    }
}

fn status_line(status: Status, msg: &str) {
    let line = format!("{} {}", status.prefix(), msg);
    if status == Status::Error {
        eprintln!("{line}");
    } else {
        println!("{line}");
    }
}

fn rule() -> ColoredString {
    "─".repeat(RULE_WIDTH).dimmed()
}

pub fn print_success(msg: &str) {
    status_line(Status::Success, msg);
}

pub fn print_error(msg: &str) {
    status_line(Status::Error, msg);
}

pub fn print_warning(msg: &str) {
    status_line(Status::Warning, msg);
}

pub fn print_info(msg: &str) {
    status_line(Status::Info, msg);
}

/// 上下两条分隔线夹住的标题
pub fn print_header(title: &str) {
    println!("\n{}\n  {}\n{}\n", rule(), title.bold(), rule());
}

/// 报告中的小节标题
pub fn print_section(title: &str) {
    println!("\n{}", title.cyan().bold());
}

/// 对齐的键值行
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<10} {}", key.dimmed(), value);
}

pub fn print_separator() {
    println!("{}", rule());
}

/// 按匹配色调着色的标签
pub fn tag_badge(tag: FitTag) -> ColoredString {
    let label = format!("[{}]", tag.label());
    match tag.tone() {
        Tone::Ok => label.green().bold(),
        Tone::Warn => label.yellow().bold(),
        Tone::Bad => label.red().bold(),
        Tone::Neutral => label.dimmed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tags() {
        assert_eq!(Status::Success.tag(), "[OK]");
        assert_eq!(Status::Error.tag(), "[ERR]");
        assert!(Status::Warning.prefix().to_string().contains("[WARN]"));
    }

    #[test]
    fn test_tag_badge_text() {
        assert!(tag_badge(FitTag::BestChallenge)
            .to_string()
            .contains("[最佳挑战]"));
        assert!(tag_badge(FitTag::Unknown).to_string().contains("[未知]"));
    }
}
