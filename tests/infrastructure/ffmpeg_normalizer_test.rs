use std::path::{Path, PathBuf};

use voxscribe::application::ports::{MediaNormalizer, NormalizationError};
use voxscribe::application::services::open_canonical_wav;
use voxscribe::infrastructure::audio::{FfmpegNormalizer, check_ffmpeg_binary};

use crate::helpers::write_wav;

fn ffmpeg_available() -> bool {
    std::process::Command::new("ffmpeg")
        .arg("-version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

#[cfg(unix)]
fn fixture_transcoder(name: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn given_default_normalizer_then_binary_is_ffmpeg() {
    assert_eq!(FfmpegNormalizer::default().binary(), "ffmpeg");
    assert_eq!(FfmpegNormalizer::new("/opt/ffmpeg").binary(), "/opt/ffmpeg");
}

#[tokio::test]
async fn given_missing_input_when_extracting_then_returns_input_not_found() {
    let dir = tempfile::TempDir::new().unwrap();
    let normalizer = FfmpegNormalizer::default();

    let result = normalizer
        .extract_audio(&dir.path().join("nope.mp3"), &dir.path().join("nope.wav"))
        .await;

    let err = result.unwrap_err();
    assert!(matches!(err, NormalizationError::InputNotFound(_)));
    assert!(err.to_string().contains("nope.mp3' not found."));
}

#[tokio::test]
async fn given_missing_binary_when_extracting_then_returns_transcoder_unavailable() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("in.mp3");
    std::fs::write(&input, b"data").unwrap();
    let normalizer = FfmpegNormalizer::new("/nonexistent/bin/ffmpeg-missing");

    let result = normalizer
        .extract_audio(&input, &dir.path().join("in.wav"))
        .await;

    assert!(matches!(
        result,
        Err(NormalizationError::TranscoderUnavailable { .. })
    ));
}

#[tokio::test]
async fn given_missing_binary_when_checking_then_returns_error() {
    assert!(
        check_ffmpeg_binary("/nonexistent/bin/ffmpeg-missing")
            .await
            .is_err()
    );
}

#[cfg(unix)]
#[tokio::test]
async fn given_transcoder_failure_when_extracting_then_error_carries_stderr() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("broken.mp4");
    std::fs::write(&input, b"garbage").unwrap();
    let normalizer = FfmpegNormalizer::new(
        fixture_transcoder("fake_transcoder_fail.sh")
            .to_string_lossy()
            .into_owned(),
    );

    let err = normalizer
        .extract_audio(&input, &dir.path().join("broken.wav"))
        .await
        .unwrap_err();

    assert!(matches!(err, NormalizationError::ConversionFailed(_)));
    assert!(err.to_string().starts_with("FFmpeg error: Invalid data found"));
    assert!(!dir.path().join("broken.wav").exists());
}

#[cfg(unix)]
#[tokio::test]
async fn given_stale_output_when_extracting_then_it_is_replaced_and_temp_is_gone() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("talk.mp3");
    let output = dir.path().join("talk.wav");
    std::fs::write(&input, b"fresh content").unwrap();
    std::fs::write(&output, b"stale").unwrap();
    std::fs::write(dir.path().join("talk_temp.wav"), b"leftover").unwrap();
    let normalizer = FfmpegNormalizer::new(
        fixture_transcoder("fake_transcoder_copy.sh")
            .to_string_lossy()
            .into_owned(),
    );

    normalizer.extract_audio(&input, &output).await.unwrap();

    assert_eq!(std::fs::read(&output).unwrap(), b"fresh content");
    assert!(!dir.path().join("talk_temp.wav").exists());
}

#[cfg(unix)]
#[tokio::test]
async fn given_deterministic_transcoder_when_extracting_twice_then_output_is_identical() {
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("talk.mp3");
    let output = dir.path().join("talk.wav");
    std::fs::write(&input, b"same bytes every time").unwrap();
    let normalizer = FfmpegNormalizer::new(
        fixture_transcoder("fake_transcoder_copy.sh")
            .to_string_lossy()
            .into_owned(),
    );

    normalizer.extract_audio(&input, &output).await.unwrap();
    let first = std::fs::read(&output).unwrap();
    normalizer.extract_audio(&input, &output).await.unwrap();
    let second = std::fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[cfg(unix)]
#[tokio::test]
async fn given_transcoder_exits_cleanly_without_output_when_extracting_then_returns_not_found_io_error()
{
    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("talk.mp3");
    std::fs::write(&input, b"data").unwrap();
    let normalizer = FfmpegNormalizer::new(
        fixture_transcoder("fake_transcoder_noop.sh")
            .to_string_lossy()
            .into_owned(),
    );

    let err = normalizer
        .extract_audio(&input, &dir.path().join("talk.wav"))
        .await
        .unwrap_err();

    match err {
        NormalizationError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected io error, got {:?}", other),
    }
    assert!(!dir.path().join("talk.wav").exists());
}

#[tokio::test]
async fn given_44khz_stereo_wav_when_extracting_via_ffmpeg_then_output_is_canonical() {
    if !ffmpeg_available() {
        return;
    }

    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("music.wav");
    let output = dir.path().join("music.normalized.wav");
    write_wav(&input, 44_100, 2, &vec![0i16; 44_100]);

    FfmpegNormalizer::default()
        .extract_audio(&input, &output)
        .await
        .unwrap();

    let reader = open_canonical_wav(&output).unwrap();
    assert!(reader.duration() > 0);
}

#[tokio::test]
async fn given_corrupted_bytes_when_extracting_via_ffmpeg_then_returns_conversion_error() {
    if !ffmpeg_available() {
        return;
    }

    let dir = tempfile::TempDir::new().unwrap();
    let input = dir.path().join("garbage.mp4");
    std::fs::write(&input, vec![0xFFu8; 128]).unwrap();

    let result = FfmpegNormalizer::default()
        .extract_audio(&input, &dir.path().join("garbage.wav"))
        .await;

    assert!(matches!(result, Err(NormalizationError::ConversionFailed(_))));
}

#[tokio::test]
async fn given_ffmpeg_in_path_when_checking_binary_then_returns_ok() {
    if !ffmpeg_available() {
        return;
    }

    assert!(check_ffmpeg_binary("ffmpeg").await.is_ok());
}
