use crate::ast;

/// An operation to validate: either source text still to be parsed, or a
/// document the caller already parsed.
#[derive(Clone, Copy, Debug)]
pub enum OperationSource<'a> {
    Document(&'a ast::operation::Document),
    Text(&'a str),
}
impl<'a> std::convert::From<&'a str> for OperationSource<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}
impl<'a> std::convert::From<&'a String> for OperationSource<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}
impl<'a> std::convert::From<&'a ast::operation::Document> for OperationSource<'a> {
    fn from(value: &'a ast::operation::Document) -> Self {
        Self::Document(value)
    }
}
