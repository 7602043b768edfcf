//! Line commands - the terminal's stand-in for buttons and the compose modal.

use thiserror::Error;

use ajuda_core::domain::PostKind;
use ajuda_core::{CreateOutcome, PostListController, SubmitOutcome};

use crate::view;

pub const HELP: &str = "\
Comandos:
  list                      mostra os posts
  new                       abre um novo post
  kind pedido|oferta        escolhe o tipo do post aberto
  text <conteúdo>           escreve o conteúdo do post aberto
  submit                    publica o post aberto
  cancel                    descarta o post aberto
  post pedido|oferta <...>  publica direto
  help                      mostra esta ajuda
  quit                      sai
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    New,
    Kind(PostKind),
    Text(String),
    Submit,
    Cancel,
    Post(PostKind, String),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Comando desconhecido: {0}. Digite 'help'.")]
    Unknown(String),

    #[error("Tipo inválido: {0}. Use pedido ou oferta.")]
    InvalidKind(String),

    #[error("Uso: {0}")]
    Usage(&'static str),
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim_start()),
        None => (line, ""),
    };

    let command = match name.to_lowercase().as_str() {
        "list" | "ls" => Command::List,
        "new" => Command::New,
        "kind" => {
            if rest.is_empty() {
                return Err(CommandError::Usage("kind pedido|oferta"));
            }
            Command::Kind(parse_kind(rest)?)
        }
        // Inner spacing is kept; the controller trims on submit.
        "text" => Command::Text(rest.to_string()),
        "submit" => Command::Submit,
        "cancel" => Command::Cancel,
        "post" => {
            let (kind, content) = rest
                .split_once(char::is_whitespace)
                .unwrap_or((rest, ""));
            if kind.is_empty() {
                return Err(CommandError::Usage("post pedido|oferta <conteúdo>"));
            }
            Command::Post(parse_kind(kind)?, content.to_string())
        }
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

fn parse_kind(raw: &str) -> Result<PostKind, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidKind(raw.trim().to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Text to print and whether to keep reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub output: String,
    pub flow: Flow,
}

impl Reply {
    fn show(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            flow: Flow::Continue,
        }
    }
}

const NO_DRAFT: &str = "Nenhum post aberto. Use 'new'.\n";
const EMPTY_CONTENT: &str = "Escreva algo antes de publicar.\n";

pub async fn execute(controller: &mut PostListController, command: Command) -> Reply {
    match command {
        Command::List => Reply::show(view::render_posts(controller.get_all())),
        Command::New => {
            controller.start_compose();
            Reply::show(view::render_compose(controller.compose()))
        }
        Command::Kind(kind) => {
            if controller.set_draft_kind(kind) {
                Reply::show(view::render_compose(controller.compose()))
            } else {
                Reply::show(NO_DRAFT)
            }
        }
        Command::Text(content) => {
            if controller.set_draft_content(content) {
                Reply::show(view::render_compose(controller.compose()))
            } else {
                Reply::show(NO_DRAFT)
            }
        }
        Command::Submit => match controller.submit_compose().await {
            Ok(SubmitOutcome::Created(_)) => published(controller),
            Ok(SubmitOutcome::Rejected) => Reply::show(EMPTY_CONTENT),
            Ok(SubmitOutcome::NotOpen) => Reply::show(NO_DRAFT),
            Err(e) => Reply::show(format!("Não foi possível salvar: {e}\n")),
        },
        Command::Cancel => {
            if controller.compose().is_open() {
                controller.cancel_compose();
                Reply::show("Post descartado.\n")
            } else {
                Reply::show(NO_DRAFT)
            }
        }
        Command::Post(kind, content) => match controller.create_post(kind, &content).await {
            Ok(CreateOutcome::Created(_)) => published(controller),
            Ok(CreateOutcome::Rejected) => Reply::show(EMPTY_CONTENT),
            Err(e) => Reply::show(format!("Não foi possível salvar: {e}\n")),
        },
        Command::Help => Reply::show(HELP),
        Command::Quit => Reply {
            output: String::new(),
            flow: Flow::Quit,
        },
    }
}

fn published(controller: &PostListController) -> Reply {
    Reply::show(format!(
        "Post publicado.\n{}",
        view::render_posts(controller.get_all())
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ajuda_core::{PersistMode, PostStore};
    use ajuda_infra::{InMemoryKeyValueStore, SystemClock};

    async fn controller() -> PostListController {
        let store = PostStore::new(Arc::new(InMemoryKeyValueStore::new()));
        let mut controller =
            PostListController::new(store, Arc::new(SystemClock), PersistMode::BestEffort);
        controller.initialize().await;
        controller
    }

    async fn run(controller: &mut PostListController, line: &str) -> Reply {
        let command = parse(line).unwrap().unwrap();
        execute(controller, command).await
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse("   "), Ok(None));
        assert_eq!(parse("LIST"), Ok(Some(Command::List)));
        assert_eq!(parse("kind oferta"), Ok(Some(Command::Kind(PostKind::Offer))));
        assert_eq!(
            parse("text   preciso de ajuda  "),
            Ok(Some(Command::Text("preciso de ajuda".to_string())))
        );
        assert_eq!(
            parse("post pedido açúcar e café"),
            Ok(Some(Command::Post(
                PostKind::Request,
                "açúcar e café".to_string()
            )))
        );
        assert_eq!(parse("text"), Ok(Some(Command::Text(String::new()))));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse("dance"), Err(CommandError::Unknown("dance".to_string())));
        assert_eq!(
            parse("kind troca"),
            Err(CommandError::InvalidKind("troca".to_string()))
        );
        assert!(matches!(parse("kind"), Err(CommandError::Usage(_))));
        assert!(matches!(parse("post"), Err(CommandError::Usage(_))));
    }

    #[tokio::test]
    async fn test_compose_flow() {
        let mut controller = controller().await;

        let reply = run(&mut controller, "list").await;
        assert!(reply.output.starts_with(view::EMPTY_TITLE));

        run(&mut controller, "new").await;
        run(&mut controller, "kind oferta").await;
        run(&mut controller, "text  conserto torneiras ").await;
        let reply = run(&mut controller, "submit").await;

        assert!(reply.output.starts_with("Post publicado."));
        assert!(reply.output.contains("[OFERTA DE AJUDA]"));
        assert!(reply.output.contains("  conserto torneiras\n"));
        assert!(!controller.compose().is_open());
    }

    #[tokio::test]
    async fn test_blank_submit_keeps_draft_open() {
        let mut controller = controller().await;

        run(&mut controller, "new").await;
        let reply = run(&mut controller, "submit").await;

        assert_eq!(reply.output, EMPTY_CONTENT);
        assert!(controller.compose().is_open());
        assert!(controller.get_all().is_empty());
    }

    #[tokio::test]
    async fn test_edits_without_draft() {
        let mut controller = controller().await;

        assert_eq!(run(&mut controller, "kind pedido").await.output, NO_DRAFT);
        assert_eq!(run(&mut controller, "text oi").await.output, NO_DRAFT);
        assert_eq!(run(&mut controller, "submit").await.output, NO_DRAFT);
        assert_eq!(run(&mut controller, "cancel").await.output, NO_DRAFT);
    }

    #[tokio::test]
    async fn test_one_shot_post_and_quit() {
        let mut controller = controller().await;

        run(&mut controller, "post pedido remédio para gripe").await;
        run(&mut controller, "post oferta carona").await;
        let blank = run(&mut controller, "post oferta").await;

        assert_eq!(blank.output, EMPTY_CONTENT);
        let contents: Vec<_> = controller.get_all().iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, vec!["carona", "remédio para gripe"]);
        assert_eq!(run(&mut controller, "quit").await.flow, Flow::Quit);
    }
}
