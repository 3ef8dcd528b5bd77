use crate::domain_model::*;
use crate::domain_port::AvatarView;
use crate::logger::*;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Clone)]
struct Element {
    visibility: Visibility,
    attributes: HashMap<String, String>,
}

/// A mutation that reached an existing element, in application order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ViewMutation {
    Hide(ElementId),
    Show(ElementId),
    SetAttribute {
        element: ElementId,
        name: String,
        value: String,
    },
    RemoveAttribute {
        element: ElementId,
        name: String,
    },
}

/// In-memory stand-in for the page holding the avatar.
pub struct MemoryAvatarView {
    elements: DashMap<ElementId, Element>,
    mutations: Mutex<Vec<ViewMutation>>,
}

impl MemoryAvatarView {
    pub fn new() -> Self {
        Self {
            elements: DashMap::new(),
            mutations: Mutex::new(Vec::new()),
        }
    }

    /// Builds a view containing the avatar container and its image.
    pub fn with_avatar(elements: &AvatarElements, initial: Visibility) -> Self {
        let view = Self::new();
        view.insert(elements.container.clone(), initial);
        view.insert(elements.image.clone(), Visibility::Visible);
        view
    }

    pub fn insert(&self, id: ElementId, visibility: Visibility) {
        self.elements.insert(
            id,
            Element {
                visibility,
                attributes: HashMap::new(),
            },
        );
    }

    pub fn visibility(&self, id: &ElementId) -> Option<Visibility> {
        self.elements.get(id).map(|e| e.visibility)
    }

    pub fn attribute(&self, id: &ElementId, name: &str) -> Option<String> {
        self.elements
            .get(id)
            .and_then(|e| e.attributes.get(name).cloned())
    }

    pub fn mutations(&self) -> Vec<ViewMutation> {
        self.mutations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    fn set_visibility(&self, id: &ElementId, visibility: Visibility) -> bool {
        match self.elements.get_mut(id) {
            Some(mut element) => {
                element.visibility = visibility;
                true
            }
            None => {
                trace!(element = %id, "no such element");
                false
            }
        }
    }

    fn record(&self, mutation: ViewMutation) {
        self.mutations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(mutation);
    }
}

impl Default for MemoryAvatarView {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarView for MemoryAvatarView {
    fn hide(&self, element: &ElementId) {
        if self.set_visibility(element, Visibility::Hidden) {
            self.record(ViewMutation::Hide(element.clone()));
        }
    }

    fn set_attribute(&self, element: &ElementId, name: &str, value: &str) {
        let Some(mut target) = self.elements.get_mut(element) else {
            trace!(element = %element, "no such element");
            return;
        };
        target.attributes.insert(name.to_owned(), value.to_owned());
        drop(target);
        self.record(ViewMutation::SetAttribute {
            element: element.clone(),
            name: name.to_owned(),
            value: value.to_owned(),
        });
    }

    fn remove_attribute(&self, element: &ElementId, name: &str) {
        let Some(mut target) = self.elements.get_mut(element) else {
            trace!(element = %element, "no such element");
            return;
        };
        target.attributes.remove(name);
        drop(target);
        self.record(ViewMutation::RemoveAttribute {
            element: element.clone(),
            name: name.to_owned(),
        });
    }

    fn show(&self, element: &ElementId) {
        if self.set_visibility(element, Visibility::Visible) {
            self.record(ViewMutation::Show(element.clone()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_elements_are_ignored() {
        let view = MemoryAvatarView::new();
        let ghost = ElementId::from("ghost");

        view.hide(&ghost);
        view.show(&ghost);
        view.set_attribute(&ghost, "src", "x");
        view.remove_attribute(&ghost, "src");

        assert_eq!(view.visibility(&ghost), None);
        assert_eq!(view.attribute(&ghost, "src"), None);
        assert!(view.mutations().is_empty());
    }

    #[test]
    fn mutations_apply_and_are_recorded_in_order() {
        let elements = AvatarElements::default();
        let view = MemoryAvatarView::with_avatar(&elements, Visibility::Hidden);

        view.set_attribute(&elements.image, "src", "a.png");
        view.show(&elements.container);
        view.hide(&elements.container);

        assert_eq!(view.attribute(&elements.image, "src").as_deref(), Some("a.png"));
        assert_eq!(view.visibility(&elements.container), Some(Visibility::Hidden));
        assert_eq!(
            view.mutations(),
            vec![
                ViewMutation::SetAttribute {
                    element: elements.image.clone(),
                    name: "src".to_string(),
                    value: "a.png".to_string(),
                },
                ViewMutation::Show(elements.container.clone()),
                ViewMutation::Hide(elements.container.clone()),
            ]
        );
    }

    #[test]
    fn remove_attribute_clears_value() {
        let elements = AvatarElements::default();
        let view = MemoryAvatarView::with_avatar(&elements, Visibility::Hidden);

        view.set_attribute(&elements.image, "src", "a.png");
        view.remove_attribute(&elements.image, "src");

        assert_eq!(view.attribute(&elements.image, "src"), None);
        assert_eq!(
            view.mutations().last(),
            Some(&ViewMutation::RemoveAttribute {
                element: elements.image.clone(),
                name: "src".to_string(),
            })
        );
    }

    #[test]
    fn poisoned_log_keeps_recording() {
        let elements = AvatarElements::default();
        let view = std::sync::Arc::new(MemoryAvatarView::with_avatar(&elements, Visibility::Hidden));

        let poisoner = view.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.mutations.lock().unwrap();
            panic!("poison the mutation log");
        })
        .join();
        assert!(view.mutations.is_poisoned());

        view.show(&elements.container);

        assert_eq!(view.mutations(), vec![ViewMutation::Show(elements.container.clone())]);
    }
}
