//! Query engine over a fixed catalog
//!
//! All state is built in [`Engine::construct`] and never mutated afterwards,
//! so an `Engine` can be shared across threads behind an `Arc` without locks.

use crate::{EngineConfig, ResultRecord, SimilarityMatrix};
use ordered_float::OrderedFloat;
use prodsim_core::{Catalog, Error, Result, TfidfVectorizer};
use std::cmp::Reverse;
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct Engine {
    catalog: Catalog,
    vectorizer: TfidfVectorizer,
    matrix: SimilarityMatrix,
    config: EngineConfig,
}

impl Engine {
    /// Vectorize every description and build the similarity matrix.
    ///
    /// Blocking and O(N²); call once per catalog.
    pub fn construct(catalog: Catalog, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let started = Instant::now();
        let mut vectorizer = config.vectorizer();
        let vectors = vectorizer.fit_transform(&catalog.descriptions())?;
        info!(
            "Vectorized {} descriptions ({} terms) in {:?}",
            vectors.len(),
            vectorizer.vocabulary_size(),
            started.elapsed()
        );

        let started = Instant::now();
        let matrix = SimilarityMatrix::build(&vectors);
        info!(
            "Built {}x{} similarity matrix in {:?}",
            matrix.len(),
            matrix.len(),
            started.elapsed()
        );

        let singletons = catalog
            .categories()
            .iter()
            .filter(|c| c.count == 1)
            .count();
        if singletons > 0 {
            warn!("{} categories have a single product and will yield no neighbours", singletons);
        }

        Ok(Self {
            catalog,
            vectorizer,
            matrix,
            config,
        })
    }

    /// Top `top_n` products most similar to `index` within its category.
    ///
    /// Candidates are ranked by descending score; equal scores keep catalog
    /// order. The query product itself is never returned. Fewer than
    /// `top_n` records come back when the category is smaller.
    pub fn get_similar(&self, index: usize, top_n: usize) -> Result<Vec<ResultRecord>> {
        let product = self.catalog.get(index)?;
        let row = self.matrix.row(index)?;

        let mut scored: Vec<(usize, f32)> = self
            .catalog
            .category_members(&product.category)
            .iter()
            .map(|&candidate| (candidate, row[candidate]))
            .collect();

        // stable: ties stay in catalog order
        scored.sort_by_key(|&(_, score)| Reverse(OrderedFloat(score)));
        scored.retain(|&(candidate, _)| candidate != index);
        scored.truncate(top_n);

        debug!(
            "Query {} in {:?}: {} neighbours",
            index,
            product.category,
            scored.len()
        );

        scored
            .into_iter()
            .map(|(candidate, score)| {
                let neighbour = self.catalog.get(candidate)?;
                Ok(ResultRecord::from_product(
                    candidate,
                    neighbour,
                    self.config.round_score(score),
                ))
            })
            .collect()
    }

    /// [`get_similar`](Self::get_similar) with the configured default count
    pub fn get_similar_default(&self, index: usize) -> Result<Vec<ResultRecord>> {
        self.get_similar(index, self.config.default_top_n)
    }

    /// Unrounded similarity between products `i` and `j`
    pub fn similarity(&self, i: usize, j: usize) -> Result<f32> {
        self.matrix.get(i, j)
    }

    /// Similarities among `indices`, for heatmap-style views
    pub fn similarity_submatrix(&self, indices: &[usize]) -> Result<Vec<Vec<f32>>> {
        self.matrix.submatrix(indices)
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[inline]
    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
