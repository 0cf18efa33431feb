use sea_orm::sea_query::LikeExpr;

/// Escape character used in search patterns.
const ESCAPE: char = '\\';

/// Builds a `LIKE` pattern that matches `needle` as a literal substring.
///
/// The wildcards `%` and `_` and the escape character itself are escaped, so a search for
/// `_` finds only values containing an underscore.
pub fn contains_pattern(needle: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | ESCAPE) {
            pattern.push(ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape(ESCAPE)
}
