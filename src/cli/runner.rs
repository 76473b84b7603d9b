use crate::{
    bundle::TemplateBundle,
    cli::Args,
    error::Result,
    generator::{GenerationReport, GenerationRequest, Generator},
    renderer::MiniJinjaRenderer,
};

/// Main CLI runner: resolves the bundle, runs the generator and reports the outcome
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the generation run and prints the confirmation lines
    pub fn run(self) -> Result<GenerationReport> {
        let engine = MiniJinjaRenderer::new();
        let bundle = self.load_bundle()?;

        let request =
            GenerationRequest::new(self.args.project_name.clone(), &self.args.project_path);
        let generator = Generator::new(&engine, &bundle, request)?.dry_run(self.args.dry_run);

        let report = generator.generate()?;

        for line in report.summary_lines() {
            println!("{line}");
        }
        if report.dry_run {
            println!("(dry run: no files were written)");
        }
        Ok(report)
    }

    fn load_bundle(&self) -> Result<TemplateBundle> {
        match &self.args.templates {
            Some(root) => TemplateBundle::load(root),
            None => TemplateBundle::bundled(),
        }
    }
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<GenerationReport> {
    Runner::new(args).run()
}
