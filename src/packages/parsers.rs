//! Listing parsers: raw tool output in, package identifiers out.
//!
//! Each rule drops a fixed number of header lines, then keeps the part of
//! every remaining line before the first separator. Blank lines are
//! ignored. Duplicates are kept.

/// `apt list --upgradable`: "Listing..." header, then `name/suite version ...`
pub fn parse_apt_upgradable(output: &str) -> Vec<String> {
    leading_fields(output, 1, '/')
}

/// `snap refresh --list`: column header, then `name version ...`
pub fn parse_snap_refresh_list(output: &str) -> Vec<String> {
    leading_fields(output, 1, ' ')
}

/// `pip list --outdated`: header and dashed separator, then `name version ...`
pub fn parse_pip_outdated(output: &str) -> Vec<String> {
    leading_fields(output, 2, ' ')
}

/// `pacman -Qu`: no header, `name old -> new`
pub fn parse_pacman_upgrades(output: &str) -> Vec<String> {
    leading_fields(output, 0, ' ')
}

fn leading_fields(output: &str, header_lines: usize, separator: char) -> Vec<String> {
    output
        .lines()
        .skip(header_lines)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_once(separator).map_or(line, |(head, _)| head).trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
