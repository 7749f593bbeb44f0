//! # 静态 HTML 报告
//!
//! - 虚频报告：来源文件按自然顺序排列，每个文件内的模式保持给定顺序
//! - 轨迹报告：每个轨迹文件对应一个动画，按轨迹路径自然排序
//!
//! 动画以相对于报告目录的路径引用。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/result.rs`, `render/config.rs`, `utils/natsort.rs`

use crate::error::{ImgvibError, Result};
use crate::models::{ResultSet, TrajectoryMovie};
use crate::render::RenderConfig;
use crate::utils::natsort::natural_cmp;

use std::fs;
use std::path::{Component, Path, PathBuf};

/// 生成虚频报告
pub fn render_imgvib_report(
    set: &ResultSet,
    title: &str,
    report_dir: &Path,
    config: &RenderConfig,
) -> String {
    let mut body = String::new();

    for (artifact, records) in set.iter_natural() {
        body.push_str("    <div>\n");
        body.push_str(&format!("        <h1>{}</h1>\n", escape_html(artifact)));
        for record in records {
            let src = escape_html(&link(&record.movie, report_dir));
            body.push_str(&format!(
                r#"        <div style="display: inline-block;">
            <h2>Index: {}: {} cm<sup>-1</sup></h2>
            <img src="{}" width="{}" height="{}" alt="{}"></img>
        </div>
"#,
                record.index,
                record.value,
                src,
                config.display_width,
                config.display_height,
                src
            ));
        }
        body.push_str("    </div>\n");
    }

    page(title, &body)
}

/// 生成轨迹报告
pub fn render_trj_report(
    pairs: &[TrajectoryMovie],
    report_dir: &Path,
    config: &RenderConfig,
) -> String {
    let mut sorted: Vec<&TrajectoryMovie> = pairs.iter().collect();
    sorted.sort_by(|a, b| natural_cmp(&a.trajectory, &b.trajectory));

    let mut body = String::new();
    for pair in sorted {
        let src = escape_html(&link(&pair.movie, report_dir));
        body.push_str(&format!(
            r#"    <div>
        <h1>{}</h1>
        <img src="{}" width="{}" height="{}" alt="{}"></img>
    </div>
"#,
            escape_html(&pair.trajectory),
            src,
            config.display_width,
            config.display_height,
            src
        ));
    }

    page("Trajectories", &body)
}

/// 写出报告（覆盖）
pub fn write_report(content: &str, path: &Path) -> Result<()> {
    fs::write(path, content).map_err(|e| ImgvibError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
    <head>
        <meta charset="utf-8"/>
        <title>{}</title>
    </head>
    <body>
{}    </body>
</html>
"#,
        escape_html(title),
        body
    )
}

fn link(movie: &str, report_dir: &Path) -> String {
    relative_path(Path::new(movie), report_dir)
        .display()
        .to_string()
}

/// 计算 `target` 相对于 `base` 的路径，无法解析时原样返回
pub fn relative_path(target: &Path, base: &Path) -> PathBuf {
    let (target_abs, base_abs) = match (fs::canonicalize(target), fs::canonicalize(base)) {
        (Ok(t), Ok(b)) => (t, b),
        _ => return target.to_path_buf(),
    };

    let t: Vec<Component> = target_abs.components().collect();
    let b: Vec<Component> = base_abs.components().collect();
    let common = t.iter().zip(&b).take_while(|(x, y)| x == y).count();

    // 不同盘符等情况
    if common == 0 {
        return target_abs;
    }

    let mut rel = PathBuf::new();
    for _ in common..b.len() {
        rel.push("..");
    }
    for comp in &t[common..] {
        rel.push(comp.as_os_str());
    }
    rel
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
