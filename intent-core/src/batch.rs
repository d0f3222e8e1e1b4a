//! Batch classification

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::Arc;

use crate::classifier::{Classification, IntentClassifier};
use crate::error::Result;
use crate::language::Tagger;
use crate::observer::{NoopObserver, RuleObserver};

/// Classify independent sentences, keeping input order
///
/// With the `parallel` feature the sentences are spread over the rayon
/// thread pool. The first error aborts the batch.
pub fn classify_batch<S>(sentences: &[S], tagger: &dyn Tagger) -> Result<Vec<Classification>>
where
    S: AsRef<str> + Sync,
{
    classify_batch_with_observer(sentences, tagger, Arc::new(NoopObserver))
}

/// Like [`classify_batch`], reporting every classification to `observer`
pub fn classify_batch_with_observer<S>(
    sentences: &[S],
    tagger: &dyn Tagger,
    observer: Arc<dyn RuleObserver>,
) -> Result<Vec<Classification>>
where
    S: AsRef<str> + Sync,
{
    log::debug!("classifying batch of {} sentences", sentences.len());

    let classify_one = |text: &S| {
        IntentClassifier::with_tagger(text.as_ref(), tagger, observer.clone())
            .map(|classifier| classifier.get())
    };

    #[cfg(feature = "parallel")]
    {
        sentences.par_iter().map(classify_one).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        sentences.iter().map(classify_one).collect()
    }
}
