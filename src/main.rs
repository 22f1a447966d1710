//! main.rs
//! Entry point for colordir

pub(crate) mod core;
pub(crate) mod ui;
pub(crate) mod utils;

use crate::core::terminal;
use crate::core::walker::{Lister, Totals};
use crate::ui::render::{RenderContext, Renderer};
use crate::ui::theme::Theme;
use crate::utils::cli::{CliAction, Options, handle_args};

use glob::Pattern;

use std::io::{self, Write};

fn main() {
    let opts = match handle_args() {
        CliAction::Run(opts) => *opts,
        CliAction::Exit(code) => std::process::exit(code),
    };

    if let Err(e) = run(&opts) {
        eprintln!("[cdir] Error: {}", e);
        std::process::exit(1);
    }
}

fn run(opts: &Options) -> io::Result<()> {
    let pattern = match opts.pattern.as_deref().map(Pattern::new).transpose() {
        Ok(p) => p,
        Err(e) => {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid pattern: {}", e),
            ));
        }
    };

    let (width, height) = terminal::dimensions();
    let mut ctx = RenderContext::new(width, height);
    ctx.recursive = opts.recursive;
    ctx.show_total = opts.show_total;
    ctx.force_list = opts.force_list;
    ctx.force_wide = opts.force_wide;
    ctx.pause = opts.pause;

    let theme = Theme::default();
    let stdout = io::stdout();
    let mut renderer = Renderer::new(ctx, &theme, stdout.lock());

    let mut totals = Totals::default();
    Lister::new(pattern, &mut renderer).list(&opts.dir, &mut totals)?;
    renderer.summary(&totals)?;
    renderer.into_inner().flush()
}
