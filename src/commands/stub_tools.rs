//! 测试用外部程序替身
//!
//! 以 shell 脚本代替 orca_pltvib / jmol / convert。脚本只写一次，
//! 所有启动子进程的测试共用同一把锁顺序执行，避免并行写脚本与 fork 交错导致 ETXTBSY。

use crate::cli::Cli;

use clap::Parser;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};
use tempfile::TempDir;

const PLTVIB: &str = r#"#!/bin/sh
f="$1"; shift
for i in "$@"; do
  p=$(printf '%s.v%03d.xyz' "$f" "$i")
  : > "$p"
  echo "creating: $p"
done
"#;

// 与 PLTVIB 相同，但倒序报告生成的文件
const PLTVIB_REVERSED: &str = r#"#!/bin/sh
f="$1"; shift
out=""
for i in "$@"; do
  p=$(printf '%s.v%03d.xyz' "$f" "$i")
  : > "$p"
  out="creating: $p
$out"
done
printf '%s' "$out"
"#;

// $2 为脚本路径，帧写到脚本所在目录
const JMOL: &str = r#"#!/bin/sh
d=$(dirname "$2")
: > "$d/movie0002.png"
: > "$d/movie0001.png"
"#;

const CONVERT: &str = r#"#!/bin/sh
for last in "$@"; do :; done
: > "$last"
"#;

pub(crate) struct StubTools {
    _dir: TempDir,
    bin: PathBuf,
}

static TOOLS: OnceLock<StubTools> = OnceLock::new();
static SPAWN: Mutex<()> = Mutex::new(());

impl StubTools {
    fn install() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().to_path_buf();
        for (name, body) in [
            ("pltvib", PLTVIB),
            ("pltvib_rev", PLTVIB_REVERSED),
            ("jmol", JMOL),
            ("convert", CONVERT),
        ] {
            let path = bin.join(name);
            fs::write(&path, body).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
        StubTools { _dir: dir, bin }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.bin.join(name)
    }

    /// 构造使用替身程序的命令行，`pltvib` 为替身名
    pub fn cli(&self, root: &Path, report: &Path, mode_flag: &str, pltvib: &str) -> Cli {
        Cli::try_parse_from([
            "imgvib".to_string(),
            root.display().to_string(),
            mode_flag.to_string(),
            "--report-dir".to_string(),
            report.display().to_string(),
            "--pltvib".to_string(),
            self.path(pltvib).display().to_string(),
            "--jmol".to_string(),
            self.path("jmol").display().to_string(),
            "--convert".to_string(),
            self.path("convert").display().to_string(),
        ])
        .unwrap()
    }
}

/// 取得子进程锁与替身程序；锁在返回值被丢弃前一直持有
pub(crate) fn acquire() -> (MutexGuard<'static, ()>, &'static StubTools) {
    let guard = SPAWN.lock().unwrap_or_else(|e| e.into_inner());
    let tools = TOOLS.get_or_init(StubTools::install);
    (guard, tools)
}
