//! # 文件收集器
//!
//! 将命令行给出的路径列表解析为有序的待上传文件列表。
//!
//! ## 功能
//! - 路径先转为绝对路径并解析符号链接；空字符串直接跳过
//! - 目录递归展开（跟随符号链接，跳过隐藏项，按文件名排序）
//! - 不存在的路径按 glob 模式展开，并给出警告
//! - 只保留文件；重叠的输入不去重
//!
//! ## 依赖关系
//! - 被 `commands/upload.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 展开通配符

use crate::models::UploadTarget;
use crate::utils::output;

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// 文件收集器
pub struct FileCollector {
    /// 输入路径（按给定顺序）
    inputs: Vec<String>,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new<S: AsRef<str>>(inputs: &[S]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// 收集所有文件，顺序与遍历顺序一致
    pub fn collect(&self) -> Vec<UploadTarget> {
        let mut targets = Vec::new();

        for input in &self.inputs {
            if input.is_empty() {
                output::print_warning(&not_a_file(input));
                continue;
            }

            let path = Path::new(input);
            let files = match path.canonicalize() {
                Ok(resolved) if resolved.is_dir() => expand_directory(&resolved),
                Ok(resolved) if resolved.is_file() => vec![resolved],
                _ => {
                    output::print_warning(&not_a_file(input));
                    expand_pattern(&absolute_pattern(path))
                }
            };

            targets.extend(files.into_iter().map(UploadTarget::new));
        }

        targets
    }
}

/// 收集路径列表中的所有文件
pub fn gather_files<S: AsRef<str>>(paths: &[S]) -> Vec<UploadTarget> {
    FileCollector::new(paths).collect()
}

fn not_a_file(input: &str) -> String {
    format!("'{}' is not a file", input)
}

/// 不存在的路径转为绝对 glob 模式；工作目录部分按字面匹配
fn absolute_pattern(path: &Path) -> String {
    if path.is_absolute() {
        return path.to_string_lossy().into_owned();
    }

    match std::env::current_dir() {
        Ok(cwd) => join_pattern(&cwd, path),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}

fn join_pattern(base: &Path, pattern: &Path) -> String {
    format!(
        "{}{}{}",
        Pattern::escape(&base.to_string_lossy()),
        std::path::MAIN_SEPARATOR,
        pattern.to_string_lossy()
    )
}

/// 递归展开目录下的所有文件
fn expand_directory(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect()
}

/// 按 glob 模式展开，丢弃目录
fn expand_pattern(pattern: &str) -> Vec<PathBuf> {
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    match glob::glob_with(pattern, options) {
        Ok(paths) => paths
            .filter_map(|p| p.ok())
            .filter(|p| p.is_file())
            .collect(),
        Err(e) => {
            output::print_warning(&format!("Invalid pattern '{}': {}", pattern, e));
            Vec::new()
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::write(root.join("b.png"), b"b").unwrap();
        fs::write(root.join("a.css"), b"a").unwrap();
        fs::create_dir_all(root.join("img/deep/er")).unwrap();
        fs::write(root.join("img/logo.svg"), b"svg").unwrap();
        fs::write(root.join("img/deep/er/icon.png"), b"png").unwrap();
        fs::write(root.join(".hidden"), b"h").unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join(".git/HEAD"), b"ref").unwrap();
        dir
    }

    fn names(targets: &[UploadTarget], root: &Path) -> Vec<String> {
        let root = root.canonicalize().unwrap();
        targets
            .iter()
            .map(|t| {
                t.path()
                    .strip_prefix(&root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let empty: [&str; 0] = [];
        assert!(gather_files(&empty).is_empty());
    }

    #[test]
    fn test_empty_string_input() {
        assert!(gather_files(&[""]).is_empty());

        let dir = create_test_dir();
        let css = dir.path().join("a.css");
        let files = gather_files(&["", css.to_str().unwrap(), ""]);
        assert_eq!(names(&files, dir.path()), vec!["a.css"]);
    }

    #[test]
    fn test_warning_names_input_as_given() {
        assert_eq!(not_a_file("img/missing.png"), "'img/missing.png' is not a file");
        assert_eq!(not_a_file(""), "'' is not a file");
    }

    #[test]
    fn test_relative_pattern_escapes_base() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("build[1]*");
        fs::create_dir_all(&base).unwrap();
        fs::write(base.join("a.png"), b"a").unwrap();
        fs::write(base.join("b.css"), b"b").unwrap();

        let pattern = join_pattern(&base, Path::new("*.png"));
        let files = expand_pattern(&pattern);
        assert_eq!(files, vec![base.join("a.png")]);
    }

    #[test]
    fn test_nonexistent_path() {
        assert!(gather_files(&["/nonexistent"]).is_empty());
        assert!(gather_files(&["/nonexistent/upload-assets/*.png"]).is_empty());
    }

    #[test]
    fn test_directory_is_recursive_and_ordered() {
        let dir = create_test_dir();
        let files = gather_files(&[dir.path().to_str().unwrap()]);

        assert_eq!(
            names(&files, dir.path()),
            vec!["a.css", "b.png", "img/deep/er/icon.png", "img/logo.svg"]
        );
        assert!(files.iter().all(|t| t.path().is_file() && t.path().is_absolute()));
    }

    #[test]
    fn test_input_order_preserved_without_dedup() {
        let dir = create_test_dir();
        let root = dir.path();
        let logo = root.join("img/logo.svg");
        let inputs = vec![
            logo.to_str().unwrap().to_string(),
            root.join("img").to_str().unwrap().to_string(),
            root.join("b.png").to_str().unwrap().to_string(),
        ];

        let files = gather_files(&inputs);
        assert_eq!(
            names(&files, root),
            vec![
                "img/logo.svg",
                "img/deep/er/icon.png",
                "img/logo.svg",
                "b.png"
            ]
        );
    }

    #[test]
    fn test_pattern_expansion_drops_directories() {
        let dir = create_test_dir();
        let root = dir.path();
        fs::create_dir_all(root.join("dir.png")).unwrap();

        let pattern = root.join("*.png");
        let files = gather_files(&[pattern.to_str().unwrap()]);
        assert_eq!(names(&files, root), vec!["b.png"]);

        let recursive = root.join("**").join("*.png");
        let files = gather_files(&[recursive.to_str().unwrap()]);
        assert_eq!(names(&files, root), vec!["b.png", "img/deep/er/icon.png"]);
    }

    #[test]
    fn test_missing_and_existing_mixed() {
        let dir = create_test_dir();
        let root = dir.path();
        let inputs = [
            root.join("missing.txt").to_str().unwrap().to_string(),
            root.join("a.css").to_str().unwrap().to_string(),
        ];
        let files = gather_files(&inputs);
        assert_eq!(names(&files, root), vec!["a.css"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_followed() {
        let dir = create_test_dir();
        let root = dir.path();
        let outside = TempDir::new().unwrap();
        fs::write(outside.path().join("linked.txt"), b"l").unwrap();
        std::os::unix::fs::symlink(outside.path(), root.join("img/link")).unwrap();

        let files = gather_files(&[root.join("img").to_str().unwrap()]);
        assert_eq!(
            names(&files, root),
            vec!["img/deep/er/icon.png", "img/link/linked.txt", "img/logo.svg"]
        );

        let through_link = gather_files(&[root.join("img/link/linked.txt").to_str().unwrap()]);
        assert_eq!(through_link.len(), 1);
        assert_eq!(
            through_link[0].path(),
            outside.path().join("linked.txt").canonicalize().unwrap()
        );
    }
}
