//! CV attachment rule.

use serde::Serialize;

use crate::field::FieldError;

/// Upper size bound for the attachment.
pub const MAX_CV_BYTES: u64 = 5 * 1024 * 1024;

const ALLOWED_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];
const ALLOWED_MIME_TYPES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// What the browser tells us about the selected file. The bytes themselves
/// never leave the input element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CvFile {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

fn extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_lowercase())
    }
}

/// Required; extension **or** MIME type must identify a pdf/doc/docx; size
/// capped at 5 MB. Type is checked before size, so a wrong format is
/// reported as such even when the file is also oversized.
pub fn validate_cv(file: Option<&CvFile>) -> Result<(), FieldError> {
    let Some(file) = file else {
        return Err(FieldError::CvRequired);
    };

    let ext_ok = extension(&file.name)
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()));
    let mime_ok = ALLOWED_MIME_TYPES.contains(&file.mime.as_str());
    if !ext_ok && !mime_ok {
        return Err(FieldError::CvType);
    }

    if file.size > MAX_CV_BYTES {
        return Err(FieldError::CvSize);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, mime: &str, size: u64) -> CvFile {
        CvFile {
            name: name.to_string(),
            mime: mime.to_string(),
            size,
        }
    }

    #[test]
    fn missing_file_is_required() {
        assert_eq!(validate_cv(None), Err(FieldError::CvRequired));
    }

    #[test]
    fn accepts_a_one_megabyte_docx() {
        let f = file(
            "resume.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            1024 * 1024,
        );
        assert_eq!(validate_cv(Some(&f)), Ok(()));
    }

    #[test]
    fn rejects_a_six_megabyte_pdf_for_size() {
        let f = file("resume.pdf", "application/pdf", 6 * 1024 * 1024);
        assert_eq!(validate_cv(Some(&f)), Err(FieldError::CvSize));
    }

    #[test]
    fn rejects_a_png_regardless_of_size() {
        let small = file("photo.png", "image/png", 10 * 1024);
        assert_eq!(validate_cv(Some(&small)), Err(FieldError::CvType));

        let large = file("photo.png", "image/png", 10 * 1024 * 1024);
        assert_eq!(validate_cv(Some(&large)), Err(FieldError::CvType));
    }

    #[test]
    fn extension_alone_is_enough_when_mime_is_generic() {
        let f = file("resume.PDF", "application/octet-stream", 100);
        assert_eq!(validate_cv(Some(&f)), Ok(()));
    }

    #[test]
    fn mime_alone_is_enough_when_name_has_no_extension() {
        let f = file("resume", "application/pdf", 100);
        assert_eq!(validate_cv(Some(&f)), Ok(()));
    }

    #[test]
    fn boundary_size_is_accepted() {
        let f = file("resume.pdf", "application/pdf", MAX_CV_BYTES);
        assert_eq!(validate_cv(Some(&f)), Ok(()));
    }
}
