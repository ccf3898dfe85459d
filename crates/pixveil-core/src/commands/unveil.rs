use std::path::{Path, PathBuf};

use crate::api::unveil::Unveiled;
use crate::SteganoError;

pub fn unveil(
    secret_media: &Path,
    output_file: Option<PathBuf>,
    password: Option<String>,
) -> Result<Unveiled, SteganoError> {
    crate::api::unveil::prepare()
        .from_secret_file(secret_media)
        .use_output_file(output_file)
        .using_password(password)
        .execute()
}
