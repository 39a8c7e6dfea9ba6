// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_topic_text(size: usize) -> String {
    let base = "Intro paragraph with `inline code` and prose.\n\n- Bullet point\n  - Nested `item`\n1. Numbered step\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_deep_list(items: usize, max_depth: usize) -> String {
    let mut content = String::new();
    for i in 0..items {
        let depth = i % (max_depth + 1);
        content.push_str(&"  ".repeat(depth));
        content.push_str(&format!("- item {i} with `code {i}` inside\n"));
    }
    content
}

#[allow(dead_code)]
pub fn generate_tick_heavy_line(pairs: usize) -> String {
    let mut content = "`a` b ".repeat(pairs);
    content.push('`');
    content
}
