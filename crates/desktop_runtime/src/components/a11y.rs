//! DOM focus helpers and arrow-key navigation for the start menu.

use wasm_bindgen::JsCast;

fn html_element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Focuses an element by ID and reports whether a focusable HTML element was found.
pub(super) fn focus_element_by_id(id: &str) -> bool {
    let Some(element) = html_element_by_id(id) else {
        return false;
    };
    let _ = element.focus();
    true
}

fn menu_items(menu_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(menu) = html_element_by_id(menu_id) else {
        return Vec::new();
    };
    let Ok(nodes) = menu.query_selector_all(r#"[role="menuitem"]"#) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .collect()
}

/// Index reached by moving `delta` from `current` through `len` items, wrapping at both ends.
/// With nothing focused, down lands on the first item and up on the last.
pub(super) fn step_index(current: Option<usize>, delta: i32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as i32;
    let next = match current {
        Some(current) => current as i32 + delta,
        None if delta >= 0 => 0,
        None => len - 1,
    };
    Some(next.rem_euclid(len) as usize)
}

/// Handles ArrowUp/ArrowDown/Home/End inside a menu. Returns whether the key was consumed.
pub(super) fn handle_menu_roving_keydown(ev: &web_sys::KeyboardEvent, menu_id: &str) -> bool {
    let items = menu_items(menu_id);
    let active_id = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())
        .map(|element| element.id())
        .unwrap_or_default();
    let current = items
        .iter()
        .position(|item| !active_id.is_empty() && item.id() == active_id);

    let target = match ev.key().as_str() {
        "ArrowDown" => step_index(current, 1, items.len()),
        "ArrowUp" => step_index(current, -1, items.len()),
        "Home" if !items.is_empty() => Some(0),
        "End" if !items.is_empty() => Some(items.len() - 1),
        _ => return false,
    };
    let Some(target) = target else {
        return false;
    };

    ev.prevent_default();
    ev.stop_propagation();
    let _ = items[target].focus();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_wraps_in_both_directions() {
        assert_eq!(step_index(Some(2), 1, 3), Some(0));
        assert_eq!(step_index(Some(0), -1, 3), Some(2));
        assert_eq!(step_index(Some(1), 1, 3), Some(2));
    }

    #[test]
    fn stepping_from_search_field_enters_list_at_an_edge() {
        assert_eq!(step_index(None, 1, 4), Some(0));
        assert_eq!(step_index(None, -1, 4), Some(3));
        assert_eq!(step_index(None, 1, 0), None);
    }
}
