mod ffmpeg_normalizer_test;
