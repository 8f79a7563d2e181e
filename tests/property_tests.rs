#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use proptest::collection::vec;
use proptest::prelude::*;
use tagforge::{Element, Render};

// Tag names, attribute names and values as plain identifier-ish strings
fn tag_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,7}"
}

fn attr_name_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z_]{0,10}"
}

fn text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!<>&\"]{0,30}"
}

fn attrs_text(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{}=\"{}\"", name.replace('_', "-"), value))
        .collect::<Vec<String>>()
        .join(" ")
}

fn unique_by_hyphenated_name(pairs: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut seen = std::collections::HashSet::new();
    pairs
        .into_iter()
        .filter(|(name, _)| seen.insert(name.replace('_', "-")))
        .collect()
}

proptest! {
    #[test]
    fn test_leaf_element_paired_form(
        tag in tag_strategy(),
        pairs in vec((attr_name_strategy(), text_strategy()), 0..5),
        text in text_strategy(),
    ) {
        let pairs = unique_by_hyphenated_name(pairs);
        let element = Element::new(tag.clone())
            .with_attributes(pairs.iter().map(|(k, v)| (k.as_str(), v.clone())))
            .with_text(text.clone());

        let expected = format!("\n<{} {}>{}</{}>", tag, attrs_text(&pairs), text, tag);
        prop_assert_eq!(element.render(), expected);
    }

    #[test]
    fn test_leaf_void_element_ignores_text(
        tag in tag_strategy(),
        pairs in vec((attr_name_strategy(), text_strategy()), 0..5),
        text in text_strategy(),
    ) {
        let pairs = unique_by_hyphenated_name(pairs);
        let element = Element::new(tag.clone())
            .void()
            .with_attributes(pairs.iter().map(|(k, v)| (k.as_str(), v.clone())))
            .with_text(text);

        let expected = format!("\n<{} {}>\n", tag, attrs_text(&pairs));
        prop_assert_eq!(element.render(), expected);
    }

    #[test]
    fn test_children_force_paired_form(
        tag in tag_strategy(),
        is_void in any::<bool>(),
        text in text_strategy(),
        child_texts in vec(text_strategy(), 1..6),
    ) {
        let mut element = Element::new(tag.clone()).with_void(is_void).with_text(text.clone());
        let children: Vec<Element> = child_texts
            .iter()
            .map(|t| Element::new("li").with_text(t.clone()))
            .collect();
        for child in &children {
            element.append(child.clone());
        }

        let inner: String = children.iter().map(Render::render).collect();
        let expected = format!("\n<{} >{}{}</{}>", tag, text, inner, tag);
        prop_assert_eq!(element.render(), expected);
    }

    #[test]
    fn test_class_first_then_options_in_call_order(
        classes in vec("[a-z][a-z-]{0,8}", 0..4),
        pairs in vec((attr_name_strategy(), text_strategy()), 0..5),
    ) {
        let pairs: Vec<(String, String)> = unique_by_hyphenated_name(pairs)
            .into_iter()
            .filter(|(name, _)| name != "class")
            .collect();
        let element = Element::new("div")
            .with_attributes(pairs.iter().map(|(k, v)| (k.as_str(), v.clone())))
            .with_classes(classes.iter());

        let names: Vec<String> = element.attributes().keys().cloned().collect();
        let mut expected = vec!["class".to_string()];
        expected.extend(pairs.iter().map(|(k, _)| k.replace('_', "-")));
        prop_assert_eq!(names, expected);
        prop_assert_eq!(&element.attributes()["class"], &classes.join(" "));
    }

    #[test]
    fn test_render_is_idempotent(
        tag in tag_strategy(),
        text in text_strategy(),
        child_count in 0usize..5,
    ) {
        let mut element = Element::new(tag).with_text(text);
        for i in 0..child_count {
            element.append(Element::new("span").with_text(i.to_string()));
        }
        prop_assert_eq!(element.render(), element.render());
    }
}
