mod api;
mod config;
mod post;
mod view;

use std::error::Error;
use std::io::{self, BufRead, Write};

use api::PostsClient;
use config::Config;
use log::{debug, info};
use view::{LoadState, PointerTarget, PostsView};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::parse();
    config.init_logger();
    info!("# Post Browser #");
    info!("");

    let client = PostsClient::new(&config);
    let mut view = PostsView::new();

    info!("Loading posts");
    let result = client.fetch_posts().await;
    if let Err(error) = &result {
        debug!("{:?}", error);
    }
    view.apply_fetch(result);

    if let LoadState::Error(message) = view.state() {
        println!("{message}");
        return Ok(());
    }

    info!("Loaded {} posts", view.posts().len());
    render(&view);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        if !dispatch(&mut view, line.trim()) {
            break;
        }
        render(&view);
    }

    Ok(())
}

/// Apply one command to the view. Returns false when the session is over.
///
/// Commands addressed to the filter panel (the trigger, the tag input, the
/// chips) count as pointer presses inside it; everything else presses
/// outside first, so an open panel is dismissed.
fn dispatch(view: &mut PostsView, input: &str) -> bool {
    let (command, rest) = match input.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command {
        "filter" => {
            view.pointer_pressed(PointerTarget::FilterPanel);
            view.toggle_filter_dialog();
        }
        "tag" => {
            view.pointer_pressed(PointerTarget::FilterPanel);
            view.set_tag_input(rest);
            view.add_tag();
        }
        "untag" => {
            view.pointer_pressed(PointerTarget::FilterPanel);
            view.remove_tag(rest);
        }
        "search" => {
            view.pointer_pressed(PointerTarget::Outside);
            view.set_query(rest);
        }
        "next" => {
            view.pointer_pressed(PointerTarget::Outside);
            view.next_page();
        }
        "prev" => {
            view.pointer_pressed(PointerTarget::Outside);
            view.previous_page();
        }
        "page" => {
            view.pointer_pressed(PointerTarget::Outside);
            match rest.parse() {
                Ok(page) => view.go_to_page(page),
                Err(_) => println!("usage: page <number>"),
            }
        }
        "show" => view.pointer_pressed(PointerTarget::Outside),
        "help" => print_help(),
        "quit" | "exit" => return false,
        "" => {}
        other => println!("unknown command `{other}` (try `help`)"),
    }
    true
}

fn render(view: &PostsView) {
    if view.filter_dialog().is_open() {
        let tags = view.filter().tags().join(", ");
        println!("[filter] tags: {}", if tags.is_empty() { "-" } else { tags.as_str() });
    }
    if !view.filter().query().is_empty() {
        println!("[search] {}", view.filter().query());
    }

    let current = view.current_posts();
    if current.is_empty() {
        println!("No posts.");
    }
    for post in current {
        let date = post
            .created_at
            .map(|d| format!(" · {}", d.format("%Y-%m-%d")))
            .unwrap_or_default();
        let tags = if post.tags.is_empty() {
            String::new()
        } else {
            format!(" [{}]", post.tags.join(", "))
        };
        println!("- {} — {}{}{}", post.title, post.author.username, tags, date);
        println!("    {}", post.description);
    }

    let total = view.total_pages();
    if total > 0 {
        println!("Page {}/{}", view.current_page(), total);
    }
}

fn print_help() {
    println!("filter            toggle the filter panel");
    println!("tag <text>        add a filter tag");
    println!("untag <tag>       remove a filter tag");
    println!("search <text>     set the search query");
    println!("prev | next       change page");
    println!("page <n>          jump to a page");
    println!("show              redraw the current page");
    println!("quit              leave");
}
