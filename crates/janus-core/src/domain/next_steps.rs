//! Closing hint printed after a successful scaffold.

/// The command suggested to start working on a freshly scaffolded project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    NpmRunDev,
    PythonMain,
    NpmStart,
    Generic,
}

impl NextStep {
    /// Pick a hint by substring match on the template name.
    ///
    /// Checked in order: `nextjs`/`react`, then `python`/`flask`/`django`,
    /// then `node`/`express`. The first group that matches wins.
    pub fn for_template(template_name: &str) -> Self {
        let has = |needles: &[&str]| needles.iter().any(|n| template_name.contains(n));

        if has(&["nextjs", "react"]) {
            Self::NpmRunDev
        } else if has(&["python", "flask", "django"]) {
            Self::PythonMain
        } else if has(&["node", "express"]) {
            Self::NpmStart
        } else {
            Self::Generic
        }
    }

    pub const fn command(&self) -> &'static str {
        match self {
            Self::NpmRunDev => "npm run dev",
            Self::PythonMain => "python main.py  # or your main file",
            Self::NpmStart => "npm start",
            Self::Generic => "# Start coding!",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontend_templates_suggest_dev_server() {
        assert_eq!(NextStep::for_template("nextjs"), NextStep::NpmRunDev);
        assert_eq!(NextStep::for_template("js-react"), NextStep::NpmRunDev);
    }

    #[test]
    fn python_templates_suggest_main() {
        assert_eq!(NextStep::for_template("python-flask"), NextStep::PythonMain);
        assert_eq!(NextStep::for_template("web-django"), NextStep::PythonMain);
    }

    #[test]
    fn node_templates_suggest_npm_start() {
        assert_eq!(NextStep::for_template("node-express"), NextStep::NpmStart);
        assert_eq!(NextStep::for_template("express"), NextStep::NpmStart);
    }

    #[test]
    fn earlier_group_wins() {
        // "react" is checked before "node".
        assert_eq!(NextStep::for_template("node-react"), NextStep::NpmRunDev);
    }

    #[test]
    fn unknown_template_is_generic() {
        assert_eq!(NextStep::for_template("rust-cli"), NextStep::Generic);
        assert_eq!(NextStep::Generic.command(), "# Start coding!");
    }
}
