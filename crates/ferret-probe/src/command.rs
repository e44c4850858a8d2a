//! Build command dispatch

use crate::detect::is_npm_project;
use ferret_core::ProjectType;
use std::fmt;

/// A program and its arguments, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl BuildCommand {
    /// `npm run build`
    pub fn npm_build() -> Self {
        Self::platform("npm", &["run", "build"])
    }

    /// Build a command from an argv list (`["pnpm", "run", "build"]`),
    /// `None` when the list is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        Some(Self::platform(program, &args))
    }

    /// On Windows, npm and friends are `.cmd` shims that only resolve
    /// through the shell.
    fn platform(program: &str, args: &[&str]) -> Self {
        if cfg!(windows) {
            let mut shell_args = vec!["/C".to_string(), program.to_string()];
            shell_args.extend(args.iter().map(|a| a.to_string()));
            Self {
                program: "cmd".to_string(),
                args: shell_args,
            }
        } else {
            Self {
                program: program.to_string(),
                args: args.iter().map(|a| a.to_string()).collect(),
            }
        }
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// The command to run for a project, if any.
///
/// Static projects never build. npm-family projects use the override when
/// one is configured, `npm run build` otherwise. Unknown projects only run
/// a configured override.
pub fn command_for(
    project_type: ProjectType,
    custom: Option<&BuildCommand>,
) -> Option<BuildCommand> {
    match project_type {
        ProjectType::Static => None,
        pt if is_npm_project(pt) => Some(custom.cloned().unwrap_or_else(BuildCommand::npm_build)),
        _ => custom.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch() {
        assert_eq!(
            command_for(ProjectType::Nextjs, None),
            Some(BuildCommand::npm_build())
        );
        assert_eq!(command_for(ProjectType::Static, None), None);
        assert_eq!(command_for(ProjectType::Unknown, None), None);
    }

    #[test]
    fn test_override() {
        let custom = BuildCommand::from_argv(&["pnpm".to_string(), "build".to_string()]).unwrap();
        assert_eq!(command_for(ProjectType::Vite, Some(&custom)), Some(custom.clone()));
        assert_eq!(command_for(ProjectType::Unknown, Some(&custom)), Some(custom.clone()));
        assert_eq!(command_for(ProjectType::Static, Some(&custom)), None);
    }

    #[test]
    fn test_empty_argv() {
        assert_eq!(BuildCommand::from_argv(&[]), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_display() {
        assert_eq!(BuildCommand::npm_build().to_string(), "npm run build");
    }
}
