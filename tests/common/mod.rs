use annotate_snippets::{Group, Level, Renderer};
use stlc::error::CompilationError;

pub fn render_error(error: impl Into<CompilationError>) -> String {
    let error = error.into();
    let err_type = match &error {
        CompilationError::TypeCheck(_) => "type-check",
        CompilationError::Evaluation(_) => "evaluation",
    };

    let mut groups = error.into_record();

    groups.insert(
        0,
        Group::with_title(Level::ERROR.primary_title(format!("aborting due to {err_type} error"))),
    );

    Renderer::plain().render(&groups)
}
