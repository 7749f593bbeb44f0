//! # 外部命令执行
//!
//! 阻塞执行外部程序，无超时、无重试。执行期间显示 spinner。
//!
//! ## 依赖关系
//! - 被 `render/trajectory.rs`, `render/movie.rs` 使用
//! - 使用 `utils/progress.rs`

use crate::error::{ImgvibError, Result};
use crate::utils::progress;

use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

/// 执行外部程序并返回标准输出
///
/// 程序不存在返回 `CommandNotFound`，非零退出返回 `CommandFailed`。
pub fn run_command<I, S>(program: &str, args: I, cwd: Option<&Path>) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<S> = args.into_iter().collect();
    let command_line = format_command(program, &args);

    let mut cmd = Command::new(program);
    cmd.args(&args);
    if let Some(dir) = cwd {
        cmd.current_dir(dir);
    }

    let spinner = progress::create_spinner(&command_line);
    let result = cmd.output();
    spinner.finish_and_clear();

    let out = result.map_err(|e| match e.kind() {
        ErrorKind::NotFound => ImgvibError::CommandNotFound {
            command: program.to_string(),
        },
        _ => ImgvibError::CommandFailed {
            command: command_line.clone(),
            stderr: e.to_string(),
        },
    })?;

    if !out.status.success() {
        return Err(ImgvibError::CommandFailed {
            command: command_line,
            stderr: String::from_utf8_lossy(&out.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&out.stdout).into_owned())
}

/// 拼接命令行（用于 spinner 与错误信息）
pub fn format_command<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    let mut line = program.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.as_ref().to_string_lossy());
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_command() {
        let line = format_command("orca_pltvib", &["ts.out", "6", "7"]);
        assert_eq!(line, "orca_pltvib ts.out 6 7");
    }

    #[test]
    fn test_format_command_without_args() {
        let args: [&str; 0] = [];
        assert_eq!(format_command("jmol", &args), "jmol");
    }
}
