/*
 * integration_tests.rs
 * Copyright (c) 2025 Weft developers
 *
 * End-to-end tests for template composition and scoped rendering.
 */

use std::any::type_name;

use pretty_assertions::assert_eq;
use weft::{RenderError, Scope, Template, field};

struct Counter {
    total: usize,
}

struct Label {
    text: &'static str,
}

struct Item {
    name: String,
}

struct Inventory {
    items: Vec<Item>,
}

fn item(name: &str) -> Item {
    Item {
        name: name.to_string(),
    }
}

#[test]
fn test_literal_renders_verbatim_without_context() {
    let scope = Scope::new();
    let template = Template::literal("<b>5 & 6</b>");
    assert_eq!(template.render(&scope).unwrap(), "<b>5 & 6</b>");
}

#[test]
fn test_concatenation_is_associative() {
    let label = Label { text: "mid" };
    let scope = Scope::new().with(&label);

    let a = Template::literal("a");
    let b = Template::new().slot(field(|l: &Label| l.text));
    let c = Template::literal("c");

    let left = a.clone().then(b.clone()).then(c.clone());
    let right = a.clone().then(b.clone().then(c.clone()));

    let expected = format!(
        "{}{}{}",
        a.render(&scope).unwrap(),
        b.render(&scope).unwrap(),
        c.render(&scope).unwrap()
    );

    assert_eq!(left.render(&scope).unwrap(), expected);
    assert_eq!(right.render(&scope).unwrap(), expected);
}

#[test]
fn test_placeholder_renders_count() {
    let template = Template::literal("Count: ").slot(field(|c: &Counter| &c.total));

    let counter = Counter { total: 3 };
    let scope = Scope::new().with(&counter);

    assert_eq!(template.render(&scope).unwrap(), "Count: 3");
}

#[test]
fn test_shadowing_most_recent_push_wins() {
    let template = Template::new().slot(field(|l: &Label| l.text));

    let below = Label { text: "below" };
    let above = Label { text: "above" };
    let scope = Scope::new().with(&below).with(&above);

    assert_eq!(template.render(&scope).unwrap(), "above");
}

#[test]
fn test_missing_context_fails_with_type_name() {
    let template = Template::literal("Count: ").slot(field(|c: &Counter| &c.total));
    let scope = Scope::new();

    assert_eq!(
        template.render(&scope),
        Err(RenderError::MissingContext {
            type_name: type_name::<Counter>(),
        })
    );
}

#[test]
fn test_failed_render_produces_no_output() {
    // The leading literal would have been emitted before the failure; the
    // render must still return nothing but the error.
    let template = Template::literal("partial").slot(field(|c: &Counter| &c.total));
    let scope = Scope::new();

    assert!(template.render(&scope).is_err());
}

#[test]
fn test_repeat_over_empty_collection_renders_nothing() {
    let body = Template::literal("<li>")
        .slot(field(|i: &Item| i.name.as_str()))
        .text("</li>");
    let template = Template::new().repeat(field(|inv: &Inventory| inv.items.as_slice()), body);

    let inventory = Inventory { items: Vec::new() };
    let scope = Scope::new().with(&inventory);

    assert_eq!(template.render(&scope).unwrap(), "");
}

#[test]
fn test_repeat_preserves_source_order() {
    let body = Template::new().slot(field(|i: &Item| i.name.as_str())).text(";");
    let template = Template::new().repeat(field(|inv: &Inventory| inv.items.as_slice()), body);

    let inventory = Inventory {
        items: vec![item("e1"), item("e2"), item("e3")],
    };
    let scope = Scope::new().with(&inventory);

    assert_eq!(template.render(&scope).unwrap(), "e1;e2;e3;");
}

#[test]
fn test_repeat_equals_per_element_renders() {
    let body = Template::literal("[")
        .slot(field(|i: &Item| i.name.as_str()))
        .text("]");
    let template = Template::new().repeat(
        field(|inv: &Inventory| inv.items.as_slice()),
        body.clone(),
    );

    let inventory = Inventory {
        items: vec![item("a"), item("b"), item("c")],
    };
    let scope = Scope::new().with(&inventory);

    let mut expected = String::new();
    for element in &inventory.items {
        let per_element = Scope::new().with(&inventory).with(element);
        expected.push_str(&body.render(&per_element).unwrap());
    }

    assert_eq!(template.render(&scope).unwrap(), expected);
}

#[test]
fn test_element_scope_does_not_leak_into_siblings() {
    struct Row {
        labels: Vec<Label>,
    }

    // The same context type appears outside and inside the repeat: inside,
    // each element shadows the outer label; afterwards the outer one is
    // visible again.
    let slot = || Template::new().slot(field(|l: &Label| l.text)).text(",");
    let template = slot()
        .repeat(field(|r: &Row| r.labels.as_slice()), slot())
        .then(slot());

    let outer = Label { text: "outer" };
    let row = Row {
        labels: vec![Label { text: "x" }, Label { text: "y" }],
    };
    let scope = Scope::new().with(&outer).with(&row);

    assert_eq!(template.render(&scope).unwrap(), "outer,x,y,outer,");
}

#[test]
fn test_unordered_list_end_to_end() {
    let row = Template::literal("<li>")
        .slot(field(|i: &Item| i.name.as_str()))
        .text("</li>");
    let template = Template::literal("<ul>")
        .repeat(field(|inv: &Inventory| inv.items.as_slice()), row)
        .text("</ul>");

    let inventory = Inventory {
        items: vec![item("a"), item("b")],
    };
    let scope = Scope::new().with(&inventory);

    assert_eq!(
        template.render(&scope).unwrap(),
        "<ul><li>a</li><li>b</li></ul>"
    );
}

#[test]
fn test_required_contexts_excludes_repeat_element() {
    let row = Template::new()
        .slot(field(|i: &Item| i.name.as_str()))
        .slot(field(|l: &Label| l.text));
    let template = Template::new()
        .slot(field(|c: &Counter| &c.total))
        .repeat(field(|inv: &Inventory| inv.items.as_slice()), row);

    let mut expected = vec![
        type_name::<Counter>(),
        type_name::<Inventory>(),
        type_name::<Label>(),
    ];
    expected.sort_unstable();

    // Item is supplied by the repeat itself; Label inside the body still
    // comes from the outer scope.
    assert_eq!(template.required_contexts(), expected);
}

#[test]
fn test_templates_render_concurrently() {
    let template = std::sync::Arc::new(
        Template::literal("Count: ").slot(field(|c: &Counter| &c.total)),
    );

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let template = std::sync::Arc::clone(&template);
            std::thread::spawn(move || {
                let counter = Counter { total: n };
                let scope = Scope::new().with(&counter);
                template.render(&scope).unwrap()
            })
        })
        .collect();

    for (n, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("Count: {n}"));
    }
}
