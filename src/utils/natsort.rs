//! # 自然排序
//!
//! 字母数字混合排序：内嵌的数字串按数值比较，
//! 使 `run2.out` 排在 `run10.out` 之前。
//!
//! ## 依赖关系
//! - 被 `models/result.rs`, `pipeline/discover.rs`, `report/html.rs` 使用
//! - 无外部模块依赖

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// 自然顺序比较两个字符串
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut ca = a.chars().peekable();
    let mut cb = b.chars().peekable();

    loop {
        match (ca.peek().copied(), cb.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let na = take_digits(&mut ca);
                let nb = take_digits(&mut cb);
                let ord = cmp_digit_runs(&na, &nb);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(&y);
                }
                ca.next();
                cb.next();
            }
        }
    }
}

/// 按自然顺序原地排序
pub fn natural_sort<T, F>(items: &mut [T], key: F)
where
    F: Fn(&T) -> String,
{
    items.sort_by(|a, b| natural_cmp(&key(a), &key(b)));
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

/// 比较两个数字串：先比数值，数值相同时前导零少者在前
fn cmp_digit_runs(a: &str, b: &str) -> Ordering {
    let ta = a.trim_start_matches('0');
    let tb = b.trim_start_matches('0');

    ta.len()
        .cmp(&tb.len())
        .then_with(|| ta.cmp(tb))
        .then_with(|| a.len().cmp(&b.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order_runs() {
        let mut names = vec!["run2.out", "run10.out", "run1.out"];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(names, vec!["run1.out", "run2.out", "run10.out"]);
    }

    #[test]
    fn test_natural_order_nested_paths() {
        let mut paths = vec!["calc/ts12/ts.out", "calc/ts3/ts.out", "calc/ts3/a.out"];
        paths.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(
            paths,
            vec!["calc/ts3/a.out", "calc/ts3/ts.out", "calc/ts12/ts.out"]
        );
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(natural_cmp("v006", "v6"), Ordering::Greater);
        assert_eq!(natural_cmp("v006", "v007"), Ordering::Less);
        assert_eq!(natural_cmp("v010", "v9"), Ordering::Greater);
    }

    #[test]
    fn test_prefix_and_equal() {
        assert_eq!(natural_cmp("run", "run1"), Ordering::Less);
        assert_eq!(natural_cmp("run1", "run1"), Ordering::Equal);
    }

    #[test]
    fn test_large_numbers_do_not_overflow() {
        assert_eq!(
            natural_cmp("a99999999999999999999999", "a100000000000000000000000"),
            Ordering::Less
        );
    }
}
