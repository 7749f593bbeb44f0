//! # 轨迹动画渲染
//!
//! 对单条轨迹：
//! 1. 创建专用输出目录（已存在时直接复用）
//! 2. 写入 Jmol 脚本 `animate.spt`，逐帧导出 `<stem>NNNN.png`
//! 3. `jmol -n animate.spt` 无界面执行
//! 4. 收集 `<stem>*.png` 帧图像，`convert <frames...> <movie>.gif` 合成动画
//!
//! 帧序号补零到 4 位，排序后的文件名顺序即帧顺序。
//! 渲染前删除同前缀的旧帧与旧动画；收集时只匹配当前前缀，目录中的其他图像不参与编码。
//! 脚本中的路径写在 Jmol 字符串字面量里，含 `"` 的路径直接拒绝。
//!
//! ## 依赖关系
//! - 被 `pipeline/mod.rs`, `commands/trj.rs` 调用
//! - 使用 `render/command.rs`, `render/config.rs`
//! - 使用 `glob` 收集帧文件

use super::command::run_command;
use super::config::{DirSuffixPolicy, RenderConfig};
use crate::error::{ImgvibError, Result};

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

const SCRIPT_NAME: &str = "animate.spt";
const MOVIE_EXT: &str = "gif";

/// 动画输出命名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieTarget {
    /// 基础名（通常为来源文件的 stem）
    pub base_name: String,
    /// 模式索引
    pub index: Option<usize>,
    /// 附加后缀
    pub suffix: Option<String>,
}

impl MovieTarget {
    /// 某个来源文件的第 `index` 个模式
    pub fn for_mode(base_name: impl Into<String>, index: usize) -> Self {
        MovieTarget {
            base_name: base_name.into(),
            index: Some(index),
            suffix: None,
        }
    }

    /// 独立轨迹文件
    pub fn for_trajectory(base_name: impl Into<String>) -> Self {
        MovieTarget {
            base_name: base_name.into(),
            index: None,
            suffix: Some("movie".to_string()),
        }
    }

    /// 输出目录名，同时也是动画文件的 stem
    pub fn dir_name(&self, policy: DirSuffixPolicy) -> String {
        let mut name = match (self.index, policy) {
            (Some(i), DirSuffixPolicy::IndexOnly) => format!("trj{}", i),
            (Some(i), DirSuffixPolicy::StemAndIndex) => format!("{}_trj{}", self.base_name, i),
            (None, _) => self.base_name.clone(),
        };
        if let Some(ref suffix) = self.suffix {
            name.push('_');
            name.push_str(suffix);
        }
        name
    }
}

/// 动画渲染器
pub struct MovieRenderer<'a> {
    config: &'a RenderConfig,
}

impl<'a> MovieRenderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    /// 渲染一条轨迹，返回动画文件路径
    pub fn render(&self, trajectory: &Path, target: &MovieTarget) -> Result<PathBuf> {
        if !trajectory.exists() {
            return Err(ImgvibError::FileNotFound {
                path: trajectory.display().to_string(),
            });
        }

        let name = target.dir_name(self.config.dir_policy);
        let parent = trajectory.parent().unwrap_or_else(|| Path::new(""));
        let out_dir = parent.join(&name);
        prepare_output_dir(&out_dir)?;

        // Jmol 以自身工作目录解析相对路径，脚本中统一写绝对路径
        let abs_trajectory = canonical(trajectory)?;
        let frame_base = canonical(&out_dir)?.join(&self.config.frame_stem);
        let script = jmol_script(
            &abs_trajectory,
            &frame_base,
            self.config.width,
            self.config.height,
        )?;
        let script_path = out_dir.join(SCRIPT_NAME);
        fs::write(&script_path, script).map_err(|e| ImgvibError::FileWriteError {
            path: script_path.display().to_string(),
            source: e,
        })?;

        clear_stale_frames(&out_dir, &self.config.frame_stem)?;

        // -n: 无界面
        run_command(
            &self.config.jmol,
            [OsStr::new("-n"), script_path.as_os_str()],
            None,
        )?;

        let frames = collect_frames(&out_dir, &self.config.frame_stem)?;
        let movie = out_dir.join(format!("{}.{}", name, MOVIE_EXT));
        if movie.exists() {
            fs::remove_file(&movie).map_err(|e| ImgvibError::FileWriteError {
                path: movie.display().to_string(),
                source: e,
            })?;
        }

        let mut args: Vec<&OsStr> = frames.iter().map(|f| f.as_os_str()).collect();
        args.push(movie.as_os_str());
        run_command(&self.config.convert, args, None)?;

        if !movie.exists() {
            return Err(ImgvibError::FileNotFound {
                path: movie.display().to_string(),
            });
        }

        Ok(movie)
    }
}

/// 创建输出目录，已存在不算错误
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| ImgvibError::FileWriteError {
        path: dir.display().to_string(),
        source: e,
    })
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| ImgvibError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

/// 生成 Jmol 逐帧导出脚本
pub fn jmol_script(
    trajectory: &Path,
    frame_base: &Path,
    width: u32,
    height: u32,
) -> Result<String> {
    let trajectory = jmol_literal(trajectory)?;
    let frame_base = jmol_literal(frame_base)?;
    Ok(format!(
        r#"load trajectory "{}"
set frank off
frame 1
num_frames = getProperty("modelInfo.modelCount")
for (var i = 1; i <= num_frames; i = i+1)
    var filename = "{}"+("00000"+i)[-4][0]+".png"
    write IMAGE {} {} PNG @filename
    frame next
end for
"#,
        trajectory,
        frame_base,
        width,
        height
    ))
}

/// 可直接放入 Jmol 双引号字符串的路径文本
fn jmol_literal(path: &Path) -> Result<String> {
    let text = path.display().to_string();
    if text.contains('"') {
        return Err(ImgvibError::InvalidArgument(format!(
            "Path cannot be used in a Jmol script (contains '\"'): {}",
            text
        )));
    }
    Ok(text)
}

fn png_pattern(dir: &Path, stem: &str) -> String {
    let escaped = glob::Pattern::escape(&dir.display().to_string());
    format!("{}/{}*.png", escaped, glob::Pattern::escape(stem))
}

/// 删除同前缀的旧帧
pub fn clear_stale_frames(dir: &Path, stem: &str) -> Result<usize> {
    let pattern = png_pattern(dir, stem);
    let entries = glob::glob(&pattern).map_err(|e| {
        ImgvibError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e))
    })?;

    let mut removed = 0;
    for path in entries.filter_map(|e| e.ok()) {
        fs::remove_file(&path).map_err(|e| ImgvibError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;
        removed += 1;
    }
    Ok(removed)
}

/// 收集目录中前缀为 `stem` 的帧图像（按文件名排序）
pub fn collect_frames(dir: &Path, stem: &str) -> Result<Vec<PathBuf>> {
    let pattern = png_pattern(dir, stem);
    let mut frames: Vec<PathBuf> = glob::glob(&pattern)
        .map_err(|e| ImgvibError::InvalidArgument(format!("Invalid pattern '{}': {}", pattern, e)))?
        .filter_map(|e| e.ok())
        .collect();

    if frames.is_empty() {
        return Err(ImgvibError::NoFilesFound { pattern });
    }

    frames.sort();
    Ok(frames)
}
