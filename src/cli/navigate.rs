//! Navigation command implementations

use anyhow::Result;

use galaxycode::Session;

/// Navigate to `page` and print where the session ended up
pub async fn navigate_command(session: &mut Session, page: &str) -> Result<()> {
    let transition = session.navigate_to(page)?;

    if transition.changed() {
        println!("{} -> {}", transition.from.label(), transition.to.label());
    } else {
        println!("Already on {}", transition.to.label());
    }
    println!("Location: {}", session.router().fragment());
    println!("{}", session.router().breadcrumbs().join(" / "));

    Ok(())
}

/// List all pages, marking the active and visited ones
pub async fn pages_command(session: &Session) -> Result<()> {
    let router = session.router();

    for item in router.nav_items() {
        let marker = if item.active { "*" } else { " " };
        let visited = if router.visited().contains(&item.page) {
            ""
        } else {
            " (not visited)"
        };
        println!("{} #{:<22} {}{}", marker, item.page.as_str(), item.label, visited);
    }

    Ok(())
}
