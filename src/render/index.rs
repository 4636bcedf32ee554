//! Index document linking every generated file.

use crate::model::Registry;

/// Render `README.md`: one list entry per output target, in name order.
pub fn render_index(registry: &Registry) -> String {
    let mut output = String::from("# Source Documentation Index\n\n");
    for target in registry.targets() {
        output.push_str(&format!("* [{}]({})\n\n", target.name, target.name));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_has_heading_only() {
        assert_eq!(
            render_index(&Registry::new()),
            "# Source Documentation Index\n\n"
        );
    }

    #[test]
    fn one_entry_per_target() {
        let mut registry = Registry::new();
        registry.get_or_create_target("b.md").record_input("b.c");
        registry.get_or_create_target("a.md").record_input("a.c");
        registry.get_or_create_target("a.md").record_input("a.h");

        assert_eq!(
            render_index(&registry),
            "# Source Documentation Index\n\n* [a.md](a.md)\n\n* [b.md](b.md)\n\n"
        );
    }
}
