use spotlight_astro::{Options, Renderer, render_markdown};

fn render(input: &str) -> String {
    render_markdown(input, &Options::default())
        .expect("render should succeed")
        .html
}

#[test]
fn spotlighted_fence_renders_dim_and_spotlight_lines() {
    let input = "# Demo\n\n```js\nsetup();\n// spotlight-start\nrun();\n// spotlight-end\nteardown();\n```\n";
    insta::assert_snapshot!(render(input), @r#"
<h1>Demo</h1><pre class="astro-code" data-language="js" tabindex="0"><code class="language-js has-spotlights"><span class="line dim">setup();</span>
<span class="line spotlight">run();</span>
<span class="line dim">teardown();</span></code></pre>
"#);
}

#[test]
fn inline_marker_is_stripped_from_its_line() {
    let input = "```js\nconst x = 1; // spotlight-start\nconst y = 2;\n```";
    insta::assert_snapshot!(render(input), @r#"
<pre class="astro-code" data-language="js" tabindex="0"><code class="language-js has-spotlights"><span class="line">const x = 1;</span>
<span class="line spotlight">const y = 2;</span></code></pre>
"#);
}

#[test]
fn fence_without_markers_renders_plain_lines() {
    let input = "```\nfn main() {}\n```";
    insta::assert_snapshot!(render(input), @r#"<pre class="astro-code" tabindex="0"><code><span class="line">fn main() {}</span></code></pre>"#);
}

#[test]
fn blank_line_inside_spotlight_keeps_its_height() {
    let input = "```\n// spotlight-start\na();\n\nb();\n// spotlight-end\n```";
    let html = render(input);
    assert!(html.contains("<span class=\"line spotlight\">\u{a0}</span>"));
    assert!(!html.contains("spotlight-start"));
    assert!(!html.contains("spotlight-end"));
}

#[test]
fn trailing_blank_line_in_fence_is_not_rendered() {
    let input = "```\na\n\n```";
    let html = render(input);
    assert!(!html.contains("<span class=\"line\"></span>"));
    assert!(html.ends_with("<span class=\"line\">a</span></code></pre>"));
}

#[test]
fn markers_outside_code_blocks_are_left_alone() {
    let html = render("Write `// spotlight-start` above the lines to highlight.");
    assert!(html.contains("<code>// spotlight-start</code>"));
}

#[test]
fn code_block_inside_list_is_annotated() {
    let input = "- step\n\n  ```sh\n  a\n  # spotlight\n  b // spotlight-start\n  c\n  ```\n";
    let html = render(input);
    assert!(html.contains("has-spotlights"));
    assert!(html.contains("<span class=\"line\">b</span>"));
    assert!(html.contains("<span class=\"line spotlight\">c</span>"));
    assert!(html.contains("<span class=\"line dim\"># spotlight</span>"));
}

#[test]
fn raw_html_is_escaped_unless_allowed() {
    let escaped = render("<div>hi</div>");
    assert!(escaped.contains("&lt;div&gt;"));

    let options = Options {
        allow_raw_html: true,
        ..Default::default()
    };
    let raw = Renderer::new(options).render("<div>hi</div>").unwrap();
    assert_eq!(raw.html, "<div>hi</div>");
}

#[test]
fn gfm_table_renders_alignment() {
    let html = render("| a | b |\n|:--|--:|\n| 1 | 2 |\n");
    insta::assert_snapshot!(html, @r#"<table><thead><tr><th align="left">a</th><th align="right">b</th></tr></thead><tbody><tr><td align="left">1</td><td align="right">2</td></tr></tbody></table>"#);
}

#[test]
fn gfm_task_list_renders_checkboxes() {
    let html = render("- [x] done\n- [ ] todo\n");
    assert!(html.starts_with("<ul><li class=\"task-list-item\"><input checked disabled type=\"checkbox\">"));
    assert!(html.contains("<input disabled type=\"checkbox\">"));
    assert!(html.contains("done"));
    assert!(html.contains("todo"));
}
