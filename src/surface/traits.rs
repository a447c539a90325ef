// TextSurface — the capability the extractor reads an editor through.
//
// Implementations answer structural questions about one editor view. They
// must not mutate the view, and every call against an unchanged view must
// return the same answer.

/// Read-only view over a code editor's rendered content.
pub trait TextSurface {
    /// Whether the primary editor container exists at all.
    fn has_editor(&self) -> bool;

    /// Text of each line-sized node inside the primary container, in
    /// document order. `None` when the container renders no line nodes.
    fn read_lines(&self) -> Option<Vec<String>>;

    /// Rendered text of the container's content node, if there is one.
    /// Line structure is not guaranteed.
    fn read_blob(&self) -> Option<String>;

    /// Value exposed by a legacy editor widget living in an embedded
    /// secondary document. Only consulted when there is no primary container.
    fn read_legacy(&self) -> Option<String> {
        None
    }
}
