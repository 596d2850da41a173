use lh_core::Category;

pub fn render(active: Category) -> String {
    let links = Category::ALL
        .iter()
        .map(|category| {
            let class = if *category == active { " class=\"active\"" } else { "" };
            format!(
                r#"<a href="/?category={}"{}>{}</a>"#,
                category.as_str(),
                class,
                category.label()
            )
        })
        .collect::<Vec<_>>()
        .join("");
    format!(r#"<nav class="category-nav">{}</nav>"#, links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_active_category() {
        let html = render(Category::Sports);
        assert!(html.contains(r#"<a href="/?category=sports" class="active">Sports</a>"#));
        assert!(html.contains(r#"<a href="/?category=general">General</a>"#));
    }
}
