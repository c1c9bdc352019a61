use super::*;

#[test]
fn nav_links_cover_dashboard_and_every_section() {
    let links = nav_links();
    let pairs: Vec<(&str, &str)> = links.iter().map(|l| (l.href.as_str(), l.label)).collect();
    assert_eq!(
        pairs,
        vec![
            ("/dashboard", "Dashboard"),
            ("/dashboard/blog", "Blog"),
            ("/dashboard/faqs", "FAQs"),
            ("/dashboard/legal", "Legal Pages"),
        ]
    );
}
