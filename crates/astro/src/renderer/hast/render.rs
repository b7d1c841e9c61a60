//! Lowering functions from markdown-rs MDAST to HAST.

use super::code::code_block;
use super::context::{Context, Scope};
use markdown::mdast::{self, AlignKind, Node as MdNode};
use spotlight_core::{Element, Node};

/// Lowers a list of MDAST nodes, appending the results to `out`.
pub fn render_children(children: &[MdNode], ctx: &mut Context, out: &mut Vec<Node>) {
    for child in children {
        render_node(child, ctx, out);
    }
}

fn children_of(children: &[MdNode], ctx: &mut Context) -> Vec<Node> {
    let mut out = Vec::new();
    render_children(children, ctx, &mut out);
    out
}

fn wrap(tag: &str, children: &[MdNode], ctx: &mut Context) -> Node {
    Element::new(tag)
        .with_children(children_of(children, ctx))
        .into()
}

/// Renders a paragraph node, suppressing `<p>` wrappers in tight lists.
fn render_paragraph(para: &mdast::Paragraph, ctx: &mut Context, out: &mut Vec<Node>) {
    if ctx.is_in_tight_list() {
        render_children(&para.children, ctx, out);
    } else {
        out.push(wrap("p", &para.children, ctx));
    }
}

/// Renders a list node as `<ul>` or `<ol>`.
fn render_list(list: &mdast::List, ctx: &mut Context) -> Node {
    let tag = if list.ordered { "ol" } else { "ul" };
    let mut element = Element::new(tag);
    if list.ordered
        && let Some(start) = list.start
        && start != 1
    {
        element = element.with_property("start", start);
    }

    ctx.enter(Scope::List {
        spread: list.spread,
    });
    element.children = children_of(&list.children, ctx);
    ctx.exit();

    element.into()
}

/// Renders a list item node as `<li>`.
///
/// Task list items (GFM) get a `task-list-item` class and a disabled checkbox.
fn render_list_item(item: &mdast::ListItem, ctx: &mut Context) -> Node {
    let mut li = Element::new("li");
    if let Some(checked) = item.checked {
        li.add_class("task-list-item");
        li.children.push(
            Element::new("input")
                .with_property("type", "checkbox")
                .with_property("disabled", true)
                .with_property("checked", checked)
                .into(),
        );
        li.children.push(Node::text(" "));
    }
    render_children(&item.children, ctx, &mut li.children);
    li.into()
}

/// Renders a link node as `<a>`.
fn render_link(link: &mdast::Link, ctx: &mut Context) -> Node {
    let mut a = Element::new("a").with_property("href", link.url.as_str());
    if let Some(title) = &link.title {
        a = a.with_property("title", title.as_str());
    }
    a.with_children(children_of(&link.children, ctx)).into()
}

/// Renders an image node as `<img>`.
fn render_image(img: &mdast::Image) -> Node {
    let mut el = Element::new("img")
        .with_property("src", img.url.as_str())
        .with_property("alt", img.alt.as_str());
    if let Some(title) = &img.title {
        el = el.with_property("title", title.as_str());
    }
    el.into()
}

/// Renders raw HTML, either as passthrough or escaped text based on options.
fn render_html(html: &mdast::Html, ctx: &Context) -> Node {
    if ctx.raw_html_allowed() {
        Node::raw(&html.value)
    } else {
        log::debug!(
            "Raw HTML in markdown will be escaped for security: {}",
            html.value
        );
        Node::text(&html.value)
    }
}

/// Renders a table node as `<table>` with `<thead>` and optional `<tbody>`.
fn render_table(table: &mdast::Table, ctx: &mut Context) -> Node {
    ctx.enter(Scope::Table);
    let mut rows = table.children.iter().filter_map(|row| match row {
        MdNode::TableRow(row) => Some(row),
        _ => None,
    });

    let mut element = Element::new("table");
    if let Some(head) = rows.next() {
        let tr = render_table_row(head, "th", &table.align, ctx);
        element
            .children
            .push(Element::new("thead").with_children(vec![tr]).into());
    }

    let body: Vec<Node> = rows
        .map(|row| render_table_row(row, "td", &table.align, ctx))
        .collect();
    if !body.is_empty() {
        element
            .children
            .push(Element::new("tbody").with_children(body).into());
    }
    ctx.exit();

    element.into()
}

/// Helper function to render a table row with proper alignment.
fn render_table_row(
    row: &mdast::TableRow,
    cell_tag: &str,
    align: &[AlignKind],
    ctx: &mut Context,
) -> Node {
    let mut tr = Element::new("tr");
    for (index, cell) in row.children.iter().enumerate() {
        let MdNode::TableCell(cell) = cell else {
            continue;
        };
        let mut td = Element::new(cell_tag);
        let alignment = match align.get(index) {
            Some(AlignKind::Left) => Some("left"),
            Some(AlignKind::Right) => Some("right"),
            Some(AlignKind::Center) => Some("center"),
            Some(AlignKind::None) | None => None,
        };
        if let Some(alignment) = alignment {
            td = td.with_property("align", alignment);
        }
        td.children = children_of(&cell.children, ctx);
        tr.children.push(td.into());
    }
    tr.into()
}

/// Recursively lowers an AST node, appending the result to `out`.
pub fn render_node(node: &MdNode, ctx: &mut Context, out: &mut Vec<Node>) {
    match node {
        MdNode::Root(root) => render_children(&root.children, ctx, out),
        MdNode::Text(text) => out.push(Node::text(&text.value)),
        MdNode::Paragraph(para) => render_paragraph(para, ctx, out),
        MdNode::Heading(heading) => {
            let tag = format!("h{}", heading.depth.clamp(1, 6));
            out.push(wrap(&tag, &heading.children, ctx));
        }
        MdNode::Strong(strong) => out.push(wrap("strong", &strong.children, ctx)),
        MdNode::Emphasis(emphasis) => out.push(wrap("em", &emphasis.children, ctx)),
        MdNode::Delete(delete) => out.push(wrap("del", &delete.children, ctx)),
        MdNode::InlineCode(code) => out.push(
            Element::new("code")
                .with_children(vec![Node::text(&code.value)])
                .into(),
        ),
        MdNode::Break(_) => {
            out.push(Element::new("br").into());
            out.push(Node::text("\n"));
        }
        MdNode::ThematicBreak(_) => out.push(Element::new("hr").into()),
        MdNode::Link(link) => out.push(render_link(link, ctx)),
        MdNode::Image(img) => out.push(render_image(img)),
        MdNode::List(list) => out.push(render_list(list, ctx)),
        MdNode::ListItem(item) => out.push(render_list_item(item, ctx)),
        MdNode::Blockquote(quote) => {
            ctx.enter(Scope::Blockquote);
            out.push(wrap("blockquote", &quote.children, ctx));
            ctx.exit();
        }
        MdNode::Code(code) => out.push(code_block(&code.value, code.lang.as_deref()).into()),
        MdNode::Html(html) => out.push(render_html(html, ctx)),
        MdNode::Table(table) => out.push(render_table(table, ctx)),
        // Frontmatter is metadata, not content.
        MdNode::Yaml(_) | MdNode::Toml(_) => {}
        _ => {
            log::warn!("Unhandled markdown node type: {:?}", node);
            if let Some(children) = node.children() {
                render_children(children, ctx, out);
            }
        }
    }
}
