use std::path::{Path, PathBuf};

use crate::api::inject::Injected;
use crate::PolyglotError;

pub fn inject(
    image: &Path,
    pdf: &Path,
    output: Option<PathBuf>,
) -> Result<Injected, PolyglotError> {
    crate::api::inject::prepare()
        .with_image(image)
        .with_pdf(pdf)
        .use_output(output)
        .execute()
}
