use crate::domain_model::ElementId;

/// Access to the page elements holding the avatar.
///
/// Every operation on an element that does not exist is a silent no-op.
pub trait AvatarView: Send + Sync {
    fn hide(&self, element: &ElementId);

    fn set_attribute(&self, element: &ElementId, name: &str, value: &str);

    fn remove_attribute(&self, element: &ElementId, name: &str);

    fn show(&self, element: &ElementId);
}
