//! Label table rows.

//---------------------------------------------------------------------------------------------------- Entry
/// One row of a wire enum's label table.
///
/// [`WireLabel::TABLE`](crate::WireLabel::TABLE) is a slice of these,
/// one per variant, in declaration order.
///
/// ```rust
/// use presence_wire_label::Entry;
///
/// let entry = Entry {
///     variant: (),
///     name: "DoNotDisturb",
///     label: Some("dnd"),
/// };
///
/// assert_eq!(entry.name, "DoNotDisturb");
/// assert_eq!(entry.label, Some("dnd"));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entry<E> {
    /// The variant itself.
    pub variant: E,

    /// The variant's intrinsic name, i.e. `stringify!`'d.
    pub name: &'static str,

    /// The declared wire label, if the variant has one.
    ///
    /// Encoding ignores blank (empty/whitespace-only) labels
    /// and falls back to [`Self::name`].
    pub label: Option<&'static str>,
}
