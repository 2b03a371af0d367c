//! Build helpers for recast: shell completions and man pages.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "xtask", about = "Development tasks for recast")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate shell completion scripts.
    Completions {
        /// Output directory.
        #[arg(long, default_value = "target/completions")]
        out_dir: PathBuf,
        /// Shells to generate for (default: all).
        #[arg(long, value_enum, value_delimiter = ',')]
        shell: Vec<ShellKind>,
    },
    /// Generate man pages for the CLI and each subcommand.
    Man {
        /// Output directory.
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShellKind {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

impl From<ShellKind> for Shell {
    fn from(kind: ShellKind) -> Self {
        match kind {
            ShellKind::Bash => Self::Bash,
            ShellKind::Zsh => Self::Zsh,
            ShellKind::Fish => Self::Fish,
            ShellKind::Powershell => Self::PowerShell,
            ShellKind::Elvish => Self::Elvish,
        }
    }
}

fn main() -> io::Result<()> {
    match Xtask::parse().task {
        Task::Completions { out_dir, shell } => {
            let shells = if shell.is_empty() {
                ShellKind::value_variants().to_vec()
            } else {
                shell
            };
            completions(&out_dir, &shells)
        }
        Task::Man { out_dir } => man_pages(&out_dir),
    }
}

fn completions(out_dir: &Path, shells: &[ShellKind]) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let mut cmd = recast::command();
    for &kind in shells {
        let path = clap_complete::generate_to(Shell::from(kind), &mut cmd, "recast", out_dir)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn man_pages(out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;
    let cmd = recast::command();

    write_man(&cmd, "recast", out_dir)?;
    for sub in cmd.get_subcommands().filter(|s| !s.is_hide_set()) {
        write_man(sub, &format!("recast-{}", sub.get_name()), out_dir)?;
    }
    Ok(())
}

fn write_man(cmd: &clap::Command, title: &str, out_dir: &Path) -> io::Result<()> {
    let path = out_dir.join(format!("{title}.1"));
    let mut buf = Vec::new();
    clap_mangen::Man::new(cmd.clone())
        .title(title.to_uppercase())
        .render(&mut buf)?;
    fs::write(&path, buf)?;
    println!("wrote {}", path.display());
    Ok(())
}
