mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find the first element carrying the given class, depth first.
pub fn find_by_class<'a>(root: &'a Element, class: &str) -> Option<&'a Element> {
    if root.has_class(class) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_by_class(child, class) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect every element carrying the given class, depth first.
pub fn collect_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut result = Vec::new();
    collect_by_class_recursive(root, class, &mut result);
    result
}

fn collect_by_class_recursive<'a>(root: &'a Element, class: &str, result: &mut Vec<&'a Element>) {
    if root.has_class(class) {
        result.push(root);
    }
    if let Content::Children(children) = &root.content {
        for child in children {
            collect_by_class_recursive(child, class, result);
        }
    }
}
