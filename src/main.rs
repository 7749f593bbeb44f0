//! # imgvib - 虚频模式动画报告
//!
//! 在 ORCA 计算结果中查找虚频模式，把每个模式渲染成动画，并汇总为静态 HTML 报告。
//!
//! ## 运行模式
//! - `--imgvib` - ORCA 日志 (*.out) 中的虚频
//! - `--hess`   - ORCA Hessian 文件 (*.hess) 中的虚频
//! - `--trj`    - 现成的轨迹文件 (*.trj)
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (各模式执行逻辑)
//!   │     ├── parsers/   (虚频读取)
//!   │     ├── pipeline/  (文件收集、结果对齐)
//!   │     ├── render/    (外部程序调用)
//!   │     ├── report/    (快照与报告)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod pipeline;
mod render;
mod report;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
