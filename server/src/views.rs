//! HTML rendering for pages and fragments.
//!
//! Fragments are rendered by the same functions the full page uses, so a
//! swapped-in item or counter is byte-for-byte what a reload would show.

use std::fmt::Write;

use todomvc_core::{IndexPage, ListFilter, TodoItemView, ValidationErrors};

/// Events after which the footer counter re-fetches itself.
const COUNT_REFRESH_EVENTS: &str =
    "itemAdded from:body, itemCompletionToggled from:body, itemDeleted from:body";

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn index_page(page: &IndexPage) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>htmx • TodoMVC</title>
<link rel="stylesheet" href="https://unpkg.com/todomvc-app-css@2.4.3/index.css">
<script src="https://unpkg.com/htmx.org@2.0.4"></script>
</head>
<body>
<section class="todoapp">
"#,
    );

    write_header(&mut html, page);
    // The list is rendered even when empty so fragments have a swap target.
    write_main(&mut html, page);
    write_footer(&mut html, page);

    html.push_str(
        r#"</section>
<footer class="info">
<p>Part of <a href="https://todomvc.com">TodoMVC</a></p>
</footer>
</body>
</html>
"#,
    );
    html
}

fn write_header(html: &mut String, page: &IndexPage) {
    let _ = write!(
        html,
        r##"<header class="header">
<h1>todos</h1>
<form id="new-todo-form" method="post" action="/" hx-post="/" hx-target="#todo-list" hx-swap="beforeend" hx-on::after-request="if (event.detail.successful) this.reset()">
<input id="new-todo-input" class="new-todo" name="title" placeholder="What needs to be done?" value="{}" autocomplete="off" autofocus>
"##,
        escape(&page.form.title)
    );
    if let Some(errors) = &page.form_errors {
        html.push_str(&validation_errors(errors));
    }
    html.push_str("</form>\n</header>\n");
}

fn write_main(html: &mut String, page: &IndexPage) {
    let all_completed = page.counts.total > 0 && page.counts.active == 0;
    let _ = write!(
        html,
        r#"<section class="main">
<input id="toggle-all" class="toggle-all" type="checkbox" hx-put="/toggle-all" hx-target="body"{}>
<label for="toggle-all">Mark all as complete</label>
<ul id="todo-list" class="todo-list">
"#,
        if all_completed { " checked" } else { "" }
    );
    for item in &page.todos {
        html.push_str(&todo_item(item));
    }
    html.push_str("</ul>\n</section>\n");
}

fn write_footer(html: &mut String, page: &IndexPage) {
    html.push_str("<footer class=\"footer\">\n");
    html.push_str(&active_items_count(page.counts.active));
    html.push_str("<ul class=\"filters\">\n");
    for (filter, label) in [
        (ListFilter::All, "All"),
        (ListFilter::Active, "Active"),
        (ListFilter::Completed, "Completed"),
    ] {
        let selected = if filter == page.filter {
            r#" class="selected""#
        } else {
            ""
        };
        let _ = writeln!(
            html,
            r#"<li><a href="{}"{selected}>{label}</a></li>"#,
            filter.path()
        );
    }
    html.push_str("</ul>\n");
    if page.counts.completed > 0 {
        html.push_str(
            r#"<button class="clear-completed" hx-delete="/completed" hx-target="body">Clear completed</button>
"#,
        );
    }
    html.push_str("</footer>\n");
}

/// A single list entry.
pub fn todo_item(item: &TodoItemView) -> String {
    let id = item.id;
    let (class, checked) = if item.completed {
        (r#" class="completed""#, " checked")
    } else {
        ("", "")
    };
    format!(
        r#"<li id="todo-{id}"{class}>
<div class="view">
<input id="toggle-checkbox-{id}" class="toggle" type="checkbox" hx-put="/{id}/toggle" hx-target="closest li" hx-swap="outerHTML"{checked}>
<label>{title}</label>
<button class="destroy" hx-delete="/{id}" hx-target="closest li" hx-swap="outerHTML"></button>
</div>
</li>
"#,
        title = escape(&item.title)
    )
}

/// The footer counter, which re-fetches itself on item events.
pub fn active_items_count(count: usize) -> String {
    let noun = if count == 1 { "item" } else { "items" };
    format!(
        r#"<span id="active-items-count" class="todo-count" hx-get="/active-items-count" hx-trigger="{COUNT_REFRESH_EVENTS}" hx-swap="outerHTML"><strong>{count}</strong> {noun} left</span>
"#
    )
}

pub fn validation_errors(errors: &ValidationErrors) -> String {
    let mut html = String::from("<ul class=\"errors\">\n");
    for error in &errors.0 {
        let _ = writeln!(
            html,
            "<li>{} {}</li>",
            escape(error.field),
            escape(&error.message)
        );
    }
    html.push_str("</ul>\n");
    html
}

pub fn error_message(message: &str) -> String {
    format!("<p class=\"error\">{}</p>\n", escape(message))
}
