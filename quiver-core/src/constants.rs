/// Depth of the taxonomy tree (theme / subtheme / group). The override
/// resolver, `Scope`, and the aggregate index are written against exactly
/// this shape.
pub const TAXONOMY_DEPTH: usize = 3;
