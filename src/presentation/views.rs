use crate::domain::LanguageCode;

pub fn upload_form() -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Upload Audio for Transcription</title>
</head>
<body>
    <h1>Audio Transcription Service</h1>
    <form action="/upload" method="post" enctype="multipart/form-data">
        <label for="file">Choose an audio file:</label><br><br>
        <input type="file" name="file" required><br><br>
        <label for="language">Language ({languages}):</label><br><br>
        <input type="text" name="language" required><br><br>
        <button type="submit">Transcribe</button>
    </form>
</body>
</html>
"#,
        languages = LanguageCode::supported_list()
    )
}

/// Result page. The transcript is escaped before it is embedded.
pub fn transcription_page(transcript: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Transcription Result</title>
</head>
<body>
    <h1>Transcription Result</h1>
    <p>{transcript}</p>
    <a href="/">Go back</a>
</body>
</html>
"#,
        transcript = escape_html(transcript)
    )
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}
