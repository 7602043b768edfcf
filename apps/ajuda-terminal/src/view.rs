//! Plain-text rendering of the post list and the compose form.

use ajuda_core::domain::{ComposeForm, Post, PostKind};

pub const EMPTY_TITLE: &str = "Nenhum post ainda.";
pub const EMPTY_HINT: &str = "Clique em \"Adicionar Post\" para começar.";

pub fn render_posts(posts: &[Post]) -> String {
    if posts.is_empty() {
        return format!("{EMPTY_TITLE}\n{EMPTY_HINT}\n");
    }

    let mut out = String::new();
    for post in posts {
        out.push_str(&format!("[{}] {}\n", post.kind.label(), post.created_at));
        out.push_str(&format!("  {}\n", post.content));
    }
    out
}

pub fn render_compose(form: &ComposeForm) -> String {
    let Some(draft) = form.draft() else {
        return String::new();
    };

    let mut out = String::from("Novo post\n");
    for kind in [PostKind::Request, PostKind::Offer] {
        let mark = if draft.kind == kind { 'x' } else { ' ' };
        out.push_str(&format!("  ({mark}) {}", kind.short_label()));
    }
    out.push('\n');

    if draft.content.is_empty() {
        out.push_str("  Descreva seu pedido ou oferta...\n");
    } else {
        out.push_str(&format!("  > {}\n", draft.content));
    }
    out
}
