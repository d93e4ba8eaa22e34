mod codec_vectors;
