// Copyright 2026 powerdns-client authors
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

/// Rewrites a domain name into its absolute, trailing-dot-terminated form.
pub(crate) fn make_canonical(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{}.", domain)
    }
}

/// Strips trailing dots so a domain name can be used as a URL path segment.
pub(crate) fn trim_trailing_dot(domain: &str) -> &str {
    domain.trim_end_matches('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn make_canonical_appends_missing_dot() {
        assert_eq!(make_canonical("example.com"), "example.com.");
    }

    #[test]
    fn make_canonical_keeps_absolute_names() {
        assert_eq!(make_canonical("example.com."), "example.com.");
    }

    #[test]
    fn trim_trailing_dot_strips_all_trailing_dots() {
        assert_eq!(trim_trailing_dot("example.com."), "example.com");
        assert_eq!(trim_trailing_dot("example.com.."), "example.com");
        assert_eq!(trim_trailing_dot("example.com"), "example.com");
    }
}
