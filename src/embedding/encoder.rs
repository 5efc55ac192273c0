//! BERT sentence encoder (safetensors + tokenizer).

use candle_core::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{debug, info, warn};

use super::config::EncoderConfig;
use super::device::select_device;
use super::error::EmbeddingError;

enum EncoderBackend {
    Model {
        model: BertModel,
        tokenizer: Tokenizer,
        device: Device,
        hidden_size: usize,
    },
    Stub,
}

/// Sentence embedding generator (supports stub mode).
///
/// The model handle is read-only after load; the encoder can be shared
/// across requests behind an `Arc` without further synchronization.
pub struct PromptEncoder {
    backend: EncoderBackend,
    config: EncoderConfig,
}

impl std::fmt::Debug for PromptEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptEncoder")
            .field(
                "backend",
                &match &self.backend {
                    EncoderBackend::Model { device, .. } => format!("Model({:?})", device),
                    EncoderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.embedding_dim())
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl PromptEncoder {
    /// Loads the encoder from a config (stub mode is supported).
    pub fn load(config: EncoderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Prompt encoder running in STUB mode (testing only)");
            return Ok(Self {
                backend: EncoderBackend::Stub,
                config,
            });
        }

        let device = select_device()?;
        debug!(?device, "Selected compute device for prompt encoder");

        let (model, tokenizer, hidden_size) = Self::load_model(&config, &device)?;

        info!(
            model_dir = %config.model_dir.display(),
            hidden_size,
            max_seq_len = config.max_seq_len,
            "Sentence encoder loaded"
        );

        Ok(Self {
            backend: EncoderBackend::Model {
                model,
                tokenizer,
                device,
                hidden_size,
            },
            config,
        })
    }

    fn load_model(
        config: &EncoderConfig,
        device: &Device,
    ) -> Result<(BertModel, Tokenizer, usize), EmbeddingError> {
        let mut tokenizer = Tokenizer::from_file(config.tokenizer_path()).map_err(|e| {
            EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            }
        })?;

        let truncation = TruncationParams {
            max_length: config.max_seq_len,
            ..Default::default()
        };
        tokenizer.with_truncation(Some(truncation)).map_err(|e| {
            EmbeddingError::TokenizationFailed {
                reason: format!("Failed to configure truncation: {}", e),
            }
        })?;

        let config_content = std::fs::read_to_string(config.config_path())?;
        let bert_config: BertConfig = serde_json::from_str(&config_content).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to parse model config: {}", e),
            }
        })?;

        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[config.weights_path()], DType::F32, device)
                .map_err(|e| EmbeddingError::ModelLoadFailed {
                    reason: format!("Failed to map model weights: {}", e),
                })?
        };

        let hidden_size = bert_config.hidden_size;
        let model =
            BertModel::load(vb, &bert_config).map_err(|e| EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT model: {}", e),
            })?;

        Ok((model, tokenizer, hidden_size))
    }

    /// Generates a normalized embedding for a single text.
    pub fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EncoderBackend::Model {
                model,
                tokenizer,
                device,
                hidden_size,
            } => self.embed_with_model(text, model, tokenizer, device, *hidden_size),
            EncoderBackend::Stub => self.embed_stub(text),
        }
    }

    fn embed_with_model(
        &self,
        text: &str,
        model: &BertModel,
        tokenizer: &Tokenizer,
        device: &Device,
        hidden_size: usize,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        let tokens: Vec<u32> = encoding.get_ids().to_vec();
        if tokens.is_empty() {
            return Ok(vec![0.0; hidden_size]);
        }

        debug!(
            text_len = text.len(),
            token_count = tokens.len(),
            "Generating embedding"
        );

        // Input shape: [1, seq_len]
        let input_ids = Tensor::new(&tokens[..], device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;

        let hidden_states = model.forward(&input_ids, &token_type_ids, None)?;

        // Mean pooling over the sequence: [1, seq_len, hidden] -> [hidden]
        let pooled = hidden_states.mean(1)?.squeeze(0)?;
        let embedding = pooled.to_vec1::<f32>()?;

        Ok(Self::normalize(embedding))
    }

    fn embed_stub(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        debug!(text_len = text.len(), "Generating stub embedding");

        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        let seed = hasher.finish();

        let mut embedding = Vec::with_capacity(self.config.stub_embedding_dim);
        let mut state = seed;

        for _ in 0..self.config.stub_embedding_dim {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            let value = ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0;
            embedding.push(value);
        }

        Ok(Self::normalize(embedding))
    }

    fn normalize(mut embedding: Vec<f32>) -> Vec<f32> {
        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm > 0.0 {
            for x in &mut embedding {
                *x /= norm;
            }
        }

        embedding
    }

    /// Returns the output embedding dimension.
    pub fn embedding_dim(&self) -> usize {
        match &self.backend {
            EncoderBackend::Model { hidden_size, .. } => *hidden_size,
            EncoderBackend::Stub => self.config.stub_embedding_dim,
        }
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EncoderBackend::Stub)
    }

    /// Returns `true` if a model is loaded.
    pub fn has_model(&self) -> bool {
        matches!(self.backend, EncoderBackend::Model { .. })
    }

    /// Returns the encoder configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }
}
