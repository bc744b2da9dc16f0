//! Static text shown by the menus.

pub const BANNER: &str = "
+-----------------------------------------------------------+
|                                                           |
|          Graduate English Exam Learning System            |
|          Vocabulary drills + reading strategies           |
|                                                           |
+-----------------------------------------------------------+
";

pub const WELCOME: &str = "Welcome! Drill your exam vocabulary with spaced review, \
then brush up on reading strategies.";

pub const MAIN_MENU: &str = "
+-------------------------------------+
|              Main Menu              |
+-------------------------------------+
|  1. Vocabulary learning mode        |
|  2. Reading strategies overview     |
|  3. Study statistics                |
|  4. Help                            |
|  0. Exit                            |
+-------------------------------------+
";

pub const VOCABULARY_MENU: &str = "
+-------------------------------------+
|           Vocabulary Tool           |
+-------------------------------------+
|  1. Random quiz                     |
|  2. Review quiz (due today)         |
|  3. Wrong-answer practice           |
|  4. Search                          |
|  5. Statistics                      |
|  6. Add entry                       |
|  7. Clear wrong-answer list         |
|  0. Back to main menu               |
+-------------------------------------+
";

pub const READING_OVERVIEW: &str = "
Reading comprehension strategies

1. Three-pass reading
   - Skimming: 3-5 minutes for the main idea
   - Scanning: locate key information from the questions
   - Close reading: work through the located paragraphs

2. Question types
   - Main idea: first and last paragraphs, topic sentences
   - Detail: keyword location and paraphrase recognition
   - Inference: reason from the text, do not over-infer
   - Word meaning: context plus roots and affixes
   - Attitude: watch for sentiment words
   - Structure / example: examples serve the argument

3. Long sentences
   - Find the main clause (subject, verb, object)
   - Identify subordinate clauses
   - Strip modifiers
   - Use punctuation to split

4. Time per passage: 15-18 minutes
   - Reading: 5-7 minutes
   - Questions: 8-10 minutes
   - Checking: 1-2 minutes

5. Typical distractors
   [x] Swapped concepts
   [x] Over-generalisation
   [x] Not mentioned in the text
   [x] Inference taken too far
";

pub const HELP: &str = "
Command line
  vocab                 interactive menu
  vocab --vocab         go straight to the vocabulary tool
  vocab --reading       print the reading overview and exit
  vocab --data-dir DIR  keep study data in DIR (default: user_data)
  vocab --quiz-size N   questions per random / wrong-answer quiz

Vocabulary tool
  Random quiz           N random entries from the word list
  Review quiz           entries due today: 1, 2, 4, 7 and 15 days after
                        they were first answered correctly
  Wrong-answer practice entries you have missed before
  Search                match on term (any case) or definition
  Statistics            progress and accuracy
  Add entry             add a term and its definition

An answer is accepted when it equals the whole definition (any case) or
appears inside it, e.g. \"放弃\" for \"放弃、抛弃\".

Data files (in the data directory)
  words.json            vocabulary and learning progress
  wrong_words.json      wrong-answer list
  learning_log.json     attempt counters
  config.toml           optional: quiz_size, review_intervals

Set RUST_LOG=info to see what the tool reads and writes.
";
