/// Text of every page, or an empty string if the PDF cannot be decoded.
///
/// Decoding runs on the blocking pool; a panic inside the decoder is
/// reported the same way as a decode error.
pub async fn pdf_text(bytes: Vec<u8>) -> String {
    let decoded = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes)).await;

    match decoded {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            tracing::warn!("An error occurred while reading the PDF: {}", e);
            String::new()
        }
        Err(e) => {
            tracing::warn!("PDF decoder aborted: {}", e);
            String::new()
        }
    }
}
