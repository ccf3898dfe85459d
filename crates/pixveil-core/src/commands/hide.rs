use std::path::{Path, PathBuf};

use crate::SteganoError;

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    data_file: Option<PathBuf>,
    message: Option<String>,
    password: Option<String>,
) -> Result<(), SteganoError> {
    crate::api::hide::prepare()
        .with_image(media)
        .with_output(write_to_file)
        .with_password(password)
        .use_file(data_file)
        .use_message(message)
        .execute()
}
