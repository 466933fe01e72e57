// SPDX-License-Identifier: PMPL-1.0-or-later

//! Italian strings (`XSLTErrorResources_it`).

use super::TableHeaders;

pub(crate) const HEADERS: TableHeaders = TableHeaders {
    error: "Errore: ",
    warning: "Avvertenza: ",
    xsl: "XSLT ",
    xml: "XML ",
    query: "MODELLO ",
    error_string: "#error",
};

pub(crate) const MESSAGES: &[(&str, &str)] = &[
    ("ER0000", "{0}"),
    ("ER_NO_CURLYBRACE", "Errore: '{' non può essere contenuto in un'espressione "),
    ("ER_ILLEGAL_ATTRIBUTE", "{0} ha un attributo non valido: {1}"),
    ("ER_NULL_SOURCENODE_APPLYIMPORTS", "sourceNode nullo in xsl:apply-imports!"),
    ("ER_CANNOT_ADD", "Impossibile aggiungere {0} a {1}"),
    ("ER_NULL_SOURCENODE_HANDLEAPPLYTEMPLATES", "sourceNode nullo in handleApplyTemplatesInstruction."),
    ("ER_NO_NAME_ATTRIB", "{0} deve avere un attributo name."),
    ("ER_TEMPLATE_NOT_FOUND", "Impossibile trovare la maschera: {0}"),
    ("ER_CANT_RESOLVE_NAME_AVT", "Impossibile risolvere il nome AVT in xsl:call-template."),
    ("ER_REQUIRES_ATTRIB", "{0} richiede l''attributo: {1}"),
    ("ER_MUST_HAVE_TEST_ATTRIB", "{0} deve avere un attributo ''test''. "),
    ("ER_BAD_VAL_ON_LEVEL_ATTRIB", "Valore errato nell''attributo livello: {0}"),
    ("ER_PROCESSINGINSTRUCTION_NAME_CANT_BE_XML", "Il nome dell'istruzione di elaborazione non può essere 'xml'"),
    ("ER_PROCESSINGINSTRUCTION_NOTVALID_NCNAME", "il nome dell''istruzione di elaborazione deve essere un NCName valido: {0}"),
    ("ER_NEED_MATCH_ATTRIB", "{0} deve avere un attributo match nel caso abbia un modo."),
    ("ER_NEED_NAME_OR_MATCH_ATTRIB", "{0} richiede un attributo match o name."),
    ("ER_CANT_RESOLVE_NSPREFIX", "Impossibile risolvere il prefisso dello spazio nomi: {0}"),
    ("ER_ILLEGAL_VALUE", "xml:space ha un valore non valido: {0}"),
    ("ER_NO_OWNERDOC", "Il nodo secondario non ha un documento proprietario."),
    ("ER_ELEMTEMPLATEELEM_ERR", "Errore ElemTemplateElement: {0}"),
    ("ER_NULL_CHILD", "E' stato effettuato un tentativo di aggiungere un secondario nullo."),
    ("ER_NEED_SELECT_ATTRIB", "{0} richiede un attributo select."),
    ("ER_NEED_TEST_ATTRIB", "xsl:when deve avere un attributo 'test'. "),
    ("ER_NEED_NAME_ATTRIB", "xsl:with-param deve avere un attributo 'name'. "),
    ("ER_NO_CONTEXT_OWNERDOC", "il contesto non ha un documento proprietario."),
    ("ER_COULD_NOT_CREATE_XML_PROC_LIAISON", "Impossibile creare XML TransformerFactory Liaison: {0}"),
    ("ER_PROCESS_NOT_SUCCESSFUL", "Xalan: Processo non eseguito correttamente. "),
    ("ER_NOT_SUCCESSFUL", "Xalan: non eseguito correttamente. "),
    ("ER_ENCODING_NOT_SUPPORTED", "Codifica non supportata: {0}"),
    ("ER_COULD_NOT_CREATE_TRACELISTENER", "Impossibile creare TraceListener: {0}"),
    ("ER_KEY_REQUIRES_NAME_ATTRIB", "xsl:key richiede un attributo 'name'. "),
    ("ER_KEY_REQUIRES_MATCH_ATTRIB", "xsl:key richiede un attributo 'match'. "),
    ("ER_KEY_REQUIRES_USE_ATTRIB", "xsl:key richiede un attributo 'use'. "),
    ("ER_REQUIRES_ELEMENTS_ATTRIB", "(StylesheetHandler) {0} richiede un attributo ''elements''. "),
    ("ER_MISSING_PREFIX_ATTRIB", "(StylesheetHandler) {0} attributo ''prefix'' mancante "),
    ("ER_BAD_STYLESHEET_URL", "URL del foglio di stile errato: {0}"),
    ("ER_FILE_NOT_FOUND", "File del foglio di stile non trovato: {0}"),
    ("ER_IOEXCEPTION", "Eccezione IO nel file del foglio di stile: {0}"),
    ("ER_NO_HREF_ATTRIB", "(StylesheetHandler) Impossibile trovare l''attributo href per {0}"),
    ("ER_STYLESHEET_INCLUDES_ITSELF", "(StylesheetHandler) {0} sta direttamente o indirettamente includendo se stesso."),
    ("ER_PROCESSINCLUDE_ERROR", "Errore StylesheetHandler.processInclude, {0}"),
    ("ER_MISSING_LANG_ATTRIB", "(StylesheetHandler) {0} attributo ''lang'' mancante "),
    ("ER_MISSING_CONTAINER_ELEMENT_COMPONENT", "(StylesheetHandler) elemento {0} non ubicato correttamente. Elemento contenitore ''component'' mancante "),
    ("ER_CAN_ONLY_OUTPUT_TO_ELEMENT", "L'emissione è consentita solo in un elemento, frammento di documento, documento o stampante."),
    ("ER_PROCESS_ERROR", "Errore StylesheetRoot.process"),
    ("ER_UNIMPLNODE_ERROR", "Errore UnImplNode: {0}"),
    ("ER_NO_SELECT_EXPRESSION", "Errore! Impossibile trovare espressione selezione xpath (-select)."),
    ("ER_CANNOT_SERIALIZE_XSLPROCESSOR", "Impossibile serializzare XSLProcessor!"),
    ("ER_NO_INPUT_STYLESHEET", "Input del foglio di stile non specificato."),
    ("ER_FAILED_PROCESS_STYLESHEET", "Impossibile elaborare il foglio di stile."),
    ("ER_COULDNT_PARSE_DOC", "Impossibile analizzare il documento {0}."),
    ("ER_COULDNT_FIND_FRAGMENT", "Impossibile trovare il frammento: {0}"),
    ("ER_NODE_NOT_ELEMENT", "Il nodo a cui fa riferimento l''identificativo del frammento non è un elemento: {0}"),
    ("ER_FOREACH_NEED_MATCH_OR_NAME_ATTRIB", "for-each deve avere un attributo match o name"),
    ("ER_TEMPLATES_NEED_MATCH_OR_NAME_ATTRIB", "le maschere devono avere un attributo match o name"),
    ("ER_NO_CLONE_OF_DOCUMENT_FRAG", "Non è possibile avere un clone di un frammento di documento."),
    ("ER_CANT_CREATE_ITEM", "Impossibile creare la voce nella struttura dei risultati: {0}"),
    ("ER_XMLSPACE_ILLEGAL_VALUE", "xml:space in XML di origine ha un valore non valido: {0}"),
    ("ER_NO_XSLKEY_DECLARATION", "Nessuna dichiarazione xsl:key per {0}!"),
    ("ER_CANT_CREATE_URL", "Errore! Impossibile creare url per: {0}"),
    ("ER_XSLFUNCTIONS_UNSUPPORTED", "xsl:functions non supportato "),
    ("ER_PROCESSOR_ERROR", "Errore XSLT TransformerFactory"),
    ("ER_NOT_ALLOWED_INSIDE_STYLESHEET", "(StylesheetHandler) {0} non consentito nel foglio di stile."),
    ("ER_RESULTNS_NOT_SUPPORTED", "result-ns non è più supportato.  Utilizzare xsl:output. "),
    ("ER_DEFAULTSPACE_NOT_SUPPORTED", "default-space non è più supportato.  Utilizzare xsl:strip-space oppure xsl:preserve-space. "),
    ("ER_INDENTRESULT_NOT_SUPPORTED", "indent-result non è più supportato.  Utilizzare xsl:output. "),
    ("ER_ILLEGAL_ATTRIB", "(StylesheetHandler) {0} ha un attributo non valido: {1}"),
    ("ER_UNKNOWN_XSL_ELEM", "Elemento XSL sconosciuto: {0}"),
    ("ER_BAD_XSLSORT_USE", "(StylesheetHandler) xsl:sort può essere utilizzato solo con xsl:apply-templates oppure xsl:for-each."),
    ("ER_MISPLACED_XSLWHEN", "(StylesheetHandler) xsl:when posizionato in modo non corretto. "),
    ("ER_XSLWHEN_NOT_PARENTED_BY_XSLCHOOSE", "(StylesheetHandler) xsl:when non reso principale da xsl:choose!"),
    ("ER_MISPLACED_XSLOTHERWISE", "(StylesheetHandler) xsl:otherwise posizionato in modo non corretto. "),
    ("ER_XSLOTHERWISE_NOT_PARENTED_BY_XSLCHOOSE", "(StylesheetHandler) xsl:otherwise non reso principale da xsl:choose!"),
    ("ER_NOT_ALLOWED_INSIDE_TEMPLATE", "(StylesheetHandler) {0} non è consentito in una maschera."),
    ("ER_UNKNOWN_EXT_NS_PREFIX", "(StylesheetHandler) {0} prefisso namespace estensione {1} sconosciuto"),
    ("ER_IMPORTS_AS_FIRST_ELEM", "(StylesheetHandler) Le importazioni possono verificarsi solo come primi elementi nel foglio di stile."),
    ("ER_IMPORTING_ITSELF", "(StylesheetHandler) {0} sta direttamente o indirettamente importando se stesso."),
    ("ER_XMLSPACE_ILLEGAL_VAL", "(StylesheetHandler) xml:space ha un valore non valido: {0}"),
    ("ER_PROCESSSTYLESHEET_NOT_SUCCESSFUL", "processStylesheet con esito negativo."),
    ("ER_SAX_EXCEPTION", "Eccezione SAX"),
    ("ER_XSLT_ERROR", "Errore XSLT"),
    ("ER_CURRENCY_SIGN_ILLEGAL", "il simbolo della valuta non è consentito nella stringa modello formato."),
    ("ER_DOCUMENT_FUNCTION_INVALID_IN_STYLESHEET_DOM", "La funzione documento non è supportata nel DOM del foglio di stile."),
    ("ER_CANT_RESOLVE_PREFIX_OF_NON_PREFIX_RESOLVER", "Impossibile risolvere il prefisso di un resolver non di prefisso."),
    ("ER_REDIRECT_COULDNT_GET_FILENAME", "Redirect extension: Impossibile richiamare il nome file - l'attributo file o select deve restituire una stringa valida. "),
    ("ER_CANNOT_BUILD_FORMATTERLISTENER_IN_REDIRECT", "Impossibile creare FormatterListener in Redirect extension!"),
    ("ER_INVALID_PREFIX_IN_EXCLUDERESULTPREFIX", "Prefisso in exclude-result-prefixes non valido: {0}"),
    ("ER_MISSING_NS_URI", "URI spazio nome mancante per il prefisso specificato"),
    ("ER_MISSING_ARG_FOR_OPTION", "Argomento mancante per l''opzione: {0}"),
    ("ER_INVALID_OPTION", "Opzione non valida: {0}"),
    ("ER_MALFORMED_FORMAT_STRING", "Stringa di formato errato: {0}"),
    ("ER_STYLESHEET_REQUIRES_VERSION_ATTRIB", "xsl:stylesheet richiede un attributo 'version'. "),
    ("ER_ILLEGAL_ATTRIBUTE_VALUE", "L'attributo: {0} ha un valore non valido: {1}"),
    ("ER_CHOOSE_REQUIRES_WHEN", "xsl:choose richiede xsl:when"),
    ("ER_NO_APPLY_IMPORT_IN_FOR_EACH", "xsl:apply-imports non consentito in xsl:for-each"),
    ("ER_CANT_USE_DTM_FOR_OUTPUT", "Impossibile utilizzare DTMLiaison per un nodo DOM di output... utilizzare invece com.sun.org.apache.xpath.internal.DOM2Helper."),
    ("ER_CANT_USE_DTM_FOR_INPUT", "Impossibile utilizzare DTMLiaison per un nodo DON di input... utilizzare invece com.sun.org.apache.xpath.internal.DOM2Helper."),
    ("ER_CALL_TO_EXT_FAILED", "Chiamata all''elemento estensione non riuscita: {0}"),
    ("ER_PREFIX_MUST_RESOLVE", "Il prefisso deve risolvere in uno spazio nomi: {0}"),
    ("ER_INVALID_UTF16_SURROGATE", "Rilevato surrogato UTF-16 non valido: {0} ?"),
    ("ER_XSLATTRSET_USED_ITSELF", "xsl:attribute-set {0} sta utilizzando se stesso, determinando un loop infinito. "),
    ("ER_CANNOT_MIX_XERCESDOM", "Impossibile unire input non Xerces-DOM con output Xerces-DOM."),
    ("ER_TOO_MANY_LISTENERS", "addTraceListenersToStylesheet - TooManyListenersException"),
    ("ER_IN_ELEMTEMPLATEELEM_READOBJECT", "In ElemTemplateElement.readObject: {0}"),
    ("ER_DUPLICATE_NAMED_TEMPLATE", "Sono state rilevate più maschere denominate: {0}"),
    ("ER_INVALID_KEY_CALL", "Chiamata funzione non valida: le chiamate key() ricorsive non sono consentite "),
    ("ER_REFERENCING_ITSELF", "La variabile {0} sta direttamente o indirettamente facendo riferimento a se stessa."),
    ("ER_ILLEGAL_DOMSOURCE_INPUT", "Il nodo di input non può essere nullo per DOMSource per newTemplates."),
    ("ER_CLASS_NOT_FOUND_FOR_OPTION", "File di classe non trovato per l'opzione {0}"),
    ("ER_REQUIRED_ELEM_NOT_FOUND", "Elemento richiesto non trovato: {0}"),
    ("ER_INPUT_CANNOT_BE_NULL", "InputStream non può essere nullo"),
    ("ER_URI_CANNOT_BE_NULL", "URI non può essere nullo"),
    ("ER_FILE_CANNOT_BE_NULL", "File non può essere nullo"),
    ("ER_SOURCE_CANNOT_BE_NULL", "InputSource non può essere nullo"),
    ("ER_CANNOT_INIT_BSFMGR", "Impossibile inizializzare BSF Manager"),
    ("ER_CANNOT_CMPL_EXTENSN", "Impossibile compilare l'estensione"),
    ("ER_CANNOT_CREATE_EXTENSN", "Impossibile creare l''estensione: {0} a causa di: {1}"),
    ("ER_INSTANCE_MTHD_CALL_REQUIRES", "La chiamata metodo istanza al metodo {0} richiede un'istanza Object come primo argomento"),
    ("ER_INVALID_ELEMENT_NAME", "Specificato nome elemento non valido {0}"),
    ("ER_ELEMENT_NAME_METHOD_STATIC", "Il metodo nome elemento deve essere statico {0}"),
    ("ER_EXTENSION_FUNC_UNKNOWN", "Funzione estensione {0} : {1} sconosciuta "),
    ("ER_MORE_MATCH_CONSTRUCTOR", "E'' stata trovata più di una corrispondenza migliore per il costruttore per {0}"),
    ("ER_MORE_MATCH_METHOD", "E'' stata trovata più di una corrispondenza migliore per il metodo {0}"),
    ("ER_MORE_MATCH_ELEMENT", "E'' stata trovata più di una corrispondenza migliore per il metodo elemento {0}"),
    ("ER_INVALID_CONTEXT_PASSED", "Specificato contesto non valido per valutare {0}"),
    ("ER_POOL_EXISTS", "Pool già esistente"),
    ("ER_NO_DRIVER_NAME", "Non è stato specificato alcun Nome driver"),
    ("ER_NO_URL", "Non è stata specificata alcuna URL"),
    ("ER_POOL_SIZE_LESSTHAN_ONE", "La dimensione del pool è inferiore a uno."),
    ("ER_INVALID_DRIVER", "Specificato nome driver non valido."),
    ("ER_NO_STYLESHEETROOT", "Impossibile trovare la root del foglio di stile."),
    ("ER_ILLEGAL_XMLSPACE_VALUE", "Valore non valido per xml:space"),
    ("ER_PROCESSFROMNODE_FAILED", "processFromNode non riuscito"),
    ("ER_RESOURCE_COULD_NOT_LOAD", "Impossibile caricare la risorsa [ {0} ]: {1} \n {2} \t {3}"),
    ("ER_BUFFER_SIZE_LESSTHAN_ZERO", "Dimensione buffer <=0"),
    ("ER_UNKNOWN_ERROR_CALLING_EXTENSION", "Errore sconosciuto durante la chiamata all'estensione"),
    ("ER_NO_NAMESPACE_DECL", "Il prefisso {0} non ha una dichiarazione namaspace corrispondente"),
    ("ER_ELEM_CONTENT_NOT_ALLOWED", "Contenuto elemento non consentito per lang=javaclass {0}"),
    ("ER_STYLESHEET_DIRECTED_TERMINATION", "Il foglio di stile ha indirizzato l'interruzione"),
    ("ER_ONE_OR_TWO", "1 o 2"),
    ("ER_TWO_OR_THREE", "2 o 3"),
    ("ER_COULD_NOT_LOAD_RESOURCE", "Impossibile caricare {0} (controllare CLASSPATH), verranno utilizzati i valori predefiniti."),
    ("ER_CANNOT_INIT_DEFAULT_TEMPLATES", "Impossibile inizializzare le maschere predefinite"),
    ("ER_RESULT_NULL", "Il risultato non può essere nullo"),
    ("ER_RESULT_COULD_NOT_BE_SET", "Impossibile impostare il risultato"),
    ("ER_NO_OUTPUT_SPECIFIED", "Non è stato specificato alcun output"),
    ("ER_CANNOT_TRANSFORM_TO_RESULT_TYPE", "Impossibile trasformare in un risultato di tipo {0}"),
    ("ER_CANNOT_TRANSFORM_SOURCE_TYPE", "Impossibile trasformare un''origine di tipo {0}"),
    ("ER_NULL_CONTENT_HANDLER", "Handler contenuto nullo"),
    ("ER_NULL_ERROR_HANDLER", "Handler errori nullo"),
    ("ER_CANNOT_CALL_PARSE", "non è possibile richiamare l'analisi se ContentHandler non è stato impostato"),
    ("ER_NO_PARENT_FOR_FILTER", "Nessun principale per il filtro"),
    ("ER_NO_STYLESHEET_IN_MEDIA", "Nessun foglio di stile trovato in: {0}, supporto= {1}"),
    ("ER_NO_STYLESHEET_PI", "Nessun PI xml-stylesheet trovato in: {0}"),
    ("ER_NOT_SUPPORTED", "Non supportato: {0}"),
    ("ER_PROPERTY_VALUE_BOOLEAN", "Il valore della proprietà {0} deve essere una istanza booleana"),
    ("ER_COULD_NOT_FIND_EXTERN_SCRIPT", "Impossibile richiamare lo script esterno in {0}"),
    ("ER_RESOURCE_COULD_NOT_FIND", "Risorsa [ {0} ] non trovata.\n {1}"),
    ("ER_OUTPUT_PROPERTY_NOT_RECOGNIZED", "Proprietà Output non riconosciuta: {0}"),
    ("ER_FAILED_CREATING_ELEMLITRSLT", "Creazione dell'istanza ElemLiteralResult non riuscita"),
    ("ER_VALUE_SHOULD_BE_NUMBER", "Il valore di {0} deve contenere un numero analizzabile "),
    ("ER_VALUE_SHOULD_EQUAL", "Il valore di {0} deve essere uguale a yes o no"),
    ("ER_FAILED_CALLING_METHOD", "Chiamata al metodo {0} non riuscita"),
    ("ER_FAILED_CREATING_ELEMTMPL", "Creazione dell'istanza ElemTemplateElement non riuscita"),
    ("ER_CHARS_NOT_ALLOWED", "I caratteri non sono consentiti in questo punto del documento"),
    ("ER_ATTR_NOT_ALLOWED", "L''attributo \"{0}\" non è consentito nell''elemento {1}."),
    ("ER_BAD_VALUE", "{0} valore errato {1} "),
    ("ER_ATTRIB_VALUE_NOT_FOUND", "Valore attributo {0} non trovato "),
    ("ER_ATTRIB_VALUE_NOT_RECOGNIZED", "Valore attributo {0} non riconosciuto "),
    ("ER_NULL_URI_NAMESPACE", "E' stato effettuato un tentativo di generare un prefisso spazio nome con un URI nullo"),
    ("ER_NUMBER_TOO_BIG", "Si sta effettuando un tentativo di formattare un numero superiore all'intero Long più grande"),
    ("ER_CANNOT_FIND_SAX1_DRIVER", "Impossibile trovare la classe driver SAX1 {0}"),
    ("ER_SAX1_DRIVER_NOT_LOADED", "La classe driver SAX1 {0} è stata trovata ma non è stato possibile caricarla"),
    ("ER_SAX1_DRIVER_NOT_INSTANTIATED", "La classe driver SAX1 {0} è stata caricata ma non è stato possibile instanziarla"),
    ("ER_SAX1_DRIVER_NOT_IMPLEMENT_PARSER", "La classe driver SAX1 {0} non implementa org.xml.sax.Parser"),
    ("ER_PARSER_PROPERTY_NOT_SPECIFIED", "Proprietà di sistema org.xml.sax.parser non specificata"),
    ("ER_PARSER_ARG_CANNOT_BE_NULL", "L'argomento Parser non può essere nullo"),
    ("ER_FEATURE", "Funzione: {0}"),
    ("ER_PROPERTY", "Proprietà: {0}"),
    ("ER_NULL_ENTITY_RESOLVER", "Resolver entità nullo"),
    ("ER_NULL_DTD_HANDLER", "Handler DTD nullo"),
    ("ER_NO_DRIVER_NAME_SPECIFIED", "Non è stato specificato alcun nome driver."),
    ("ER_NO_URL_SPECIFIED", "Non è stato specificato alcun URL."),
    ("ER_POOLSIZE_LESS_THAN_ONE", "La dimensione del pool è inferiore a 1."),
    ("ER_INVALID_DRIVER_NAME", "Specificato nome driver non valido."),
    ("ER_ERRORLISTENER", "ErrorListener"),
    ("ER_ASSERT_NO_TEMPLATE_PARENT", "Errore di programmazione. expr senza ElemTemplateElement principale."),
    ("ER_ASSERT_REDUNDENT_EXPR_ELIMINATOR", "Asserzione di programma in RedundentExprEliminator: {0}"),
    ("ER_NOT_ALLOWED_IN_POSITION", "{0}non è consentito in questa posizione in stylesheet"),
    ("ER_NONWHITESPACE_NOT_ALLOWED_IN_POSITION", "Testo Non-whitespace non consentito in questa posizione in stylesheet"),
    ("INVALID_TCHAR", "Valore non valido: {1} utilizzato per l''attributo CHAR: {0}. Un attributo di tipo CHAR deve essere di 1 solo carattere. "),
    ("INVALID_QNAME", "Valore non valido: {1} utilizzato per l''attributo QNAME: {0}"),
    ("INVALID_ENUM", "Valore non valido: {1} utilizzato per l''attributo ENUM: {0}.  I valori validi sono: {2}."),
    ("INVALID_NMTOKEN", "Valore non valido: {1} utilizzato per l''attributo NMTOKEN: {0} "),
    ("INVALID_NCNAME", "Valore non valido: {1} utilizzato per l''attributo NCNAME: {0} "),
    ("INVALID_BOOLEAN", "Valore non valido: {1} utilizzato per l''attributo boolean: {0} "),
    ("INVALID_NUMBER", "Valore non valido: {1} utilizzato per l''attributo number: {0} "),
    ("ER_ARG_LITERAL", "L''argomento di {0} nel modello di corrispondenza deve essere letterale. "),
    ("ER_DUPLICATE_GLOBAL_VAR", "Dichiarazione di variabile globale duplicata. "),
    ("ER_DUPLICATE_VAR", "Dichiarazione di variabile duplicata. "),
    ("ER_TEMPLATE_NAME_MATCH", "xsl:template deve avere un attributo name oppure match (o entrambi)"),
    ("ER_INVALID_PREFIX", "Prefisso in exclude-result-prefixes non valido: {0}"),
    ("ER_NO_ATTRIB_SET", "attribute-set denominato {0} non esiste "),
    ("WG_FOUND_CURLYBRACE", "Rilevato '}' senza una maschera attributo aperta."),
    ("WG_COUNT_ATTRIB_MATCHES_NO_ANCESTOR", "Attenzione: l'attributo count non corrisponde ad un predecessore in xsl:number! Destinazione = {0}"),
    ("WG_EXPR_ATTRIB_CHANGED_TO_SELECT", "Sintassi obsoleta: Il nome dell'attributo 'expr' è stato modificato in 'select'."),
    ("WG_NO_LOCALE_IN_FORMATNUMBER", "Xalan non gestisce ancora il nome locale nella funzione formato-numero."),
    ("WG_LOCALE_NOT_FOUND", "Attenzione: Impossibile trovare la locale per xml:lang={0}"),
    ("WG_CANNOT_MAKE_URL_FROM", "Impossibile ricavare l''URL da: {0}"),
    ("WG_CANNOT_LOAD_REQUESTED_DOC", "Impossibile caricare il documento richiesto: {0}"),
    ("WG_CANNOT_FIND_COLLATOR", "Impossibile trovare Collator per <sort xml:lang={0}"),
    ("WG_FUNCTIONS_SHOULD_USE_URL", "Sintassi obsoleta: l'istruzione functions deve utilizzare un url di {0}"),
    ("WG_ENCODING_NOT_SUPPORTED_USING_UTF8", "codifica non supportata: {0}, viene utilizzato UTF-8"),
    ("WG_ENCODING_NOT_SUPPORTED_USING_JAVA", "codifica non supportata: {0}, viene utilizzato Java {1}"),
    ("WG_SPECIFICITY_CONFLICTS", "Sono stati rilevati conflitti di specificità: {0} Verrà utilizzato l'ultimo trovato nel foglio di stile. "),
    ("WG_PARSING_AND_PREPARING", "========= Analisi e preparazione {0} =========="),
    ("WG_ATTR_TEMPLATE", "Maschera attributo, {0}"),
    ("WG_CONFLICT_BETWEEN_XSLSTRIPSPACE_AND_XSLPRESERVESP", "Conflitto di corrispondenza tra xsl:strip-space e xsl:preserve-space"),
    ("WG_ATTRIB_NOT_HANDLED", "Xalan non può ancora gestire l''attributo {0}."),
    ("WG_NO_DECIMALFORMAT_DECLARATION", "Nessuna dichiarazione trovata per il formato decimale: {0}"),
    ("WG_OLD_XSLT_NS", "XSLT Namespace mancante o non corretto. "),
    ("WG_ONE_DEFAULT_XSLDECIMALFORMAT_ALLOWED", "E' consentita una sola dichiarazione xsl:decimal-format predefinita. "),
    ("WG_XSLDECIMALFORMAT_NAMES_MUST_BE_UNIQUE", "I nomi xsl:decimal-format devono essere univoci. Il nome \"{0}\" è stato duplicato."),
    ("WG_ILLEGAL_ATTRIBUTE", "{0} ha un attributo non valido: {1}"),
    ("WG_COULD_NOT_RESOLVE_PREFIX", "Impossibile risolvere il prefisso dello spazio nome: {0}. Il nodo verrà ignorato."),
    ("WG_STYLESHEET_REQUIRES_VERSION_ATTRIB", "xsl:stylesheet richiede un attributo 'version'. "),
    ("WG_ILLEGAL_ATTRIBUTE_NAME", "Nome attributo non valido: {0}"),
    ("WG_ILLEGAL_ATTRIBUTE_VALUE", "Valore non valido utilizzato per l''attributo {0}: {1}"),
    ("WG_EMPTY_SECOND_ARG", "Il nodeset che risulta dal secondo argomento della funzione documento è vuoto. Restituisce un nodeset vuoto. "),
    ("WG_PROCESSINGINSTRUCTION_NAME_CANT_BE_XML", "Il valore dell'attributo 'name' del nome xsl:processing-instruction non deve essere 'xml'"),
    ("WG_PROCESSINGINSTRUCTION_NOTVALID_NCNAME", "Il valore dell'attributo 'name' di xsl:processing-instruction deve essere un NCName valido: {0}"),
    ("WG_ILLEGAL_ATTRIBUTE_POSITION", "Impossibile aggiungere l''attributo {0} dopo i nodi secondari o prima che sia prodotto un elemento. L''attributo verrà ignorato. "),
    ("ui_language", "it"),
    ("help_language", "it"),
    ("language", "it"),
    ("BAD_CODE", "Il parametro per createMessage fuori limite"),
    ("FORMAT_FAILED", "Rilevata eccezione durante la chiamata messageFormat"),
    ("version", ">>>>>>> Versione Xalan "),
    ("version2", "<<<<<<<"),
    ("yes", "sì"),
    ("line", "Riga #"),
    ("column", "Colonna #"),
    ("xsldone", "XSLProcessor: eseguito"),
    ("xslProc_option", "Opzioni classe Process riga comandi Xalan-J:"),
    ("xslProc_invalid_xsltc_option", "Opzione {0} non supportata in modalità. "),
    ("xslProc_invalid_xalan_option", "L''opzione {0} può essere utilizzata solo con -XSLTC."),
    ("xslProc_no_input", "Errore: Nessun foglio di stile o xml di immissione specificato. Eseguire questo comando senza opzioni per istruzioni sull'utilizzo. "),
    ("xslProc_common_options", "-Opzioni comuni-"),
    ("xslProc_xalan_options", "-Opzioni per Xalan-"),
    ("xslProc_xsltc_options", "-Opzioni per XSLTC-"),
    ("xslProc_return_to_continue", "(premere <invio> per continuare)"),
    ("optionXSLTC", "   [-XSLTC (utilizza XSLTC per la trasformazioni)]"),
    ("optionIN", "   [-IN inputXMLURL]"),
    ("optionXSL", "   [-XSL XSLTransformationURL]"),
    ("optionOUT", "   [-OUT outputFileName]"),
    ("optionLXCIN", "   [-LXCIN compiledStylesheetFileNameIn]"),
    ("optionLXCOUT", "   [-LXCOUT compiledStylesheetFileNameOutOut]"),
    ("optionPARSER", "   [-PARSER nome classe completo del collegamento parser]"),
    ("optionE", "   [-E (non espandere i riferimenti entità)]"),
    ("optionV", "   [-E (non espandere i riferimenti entità)]"),
    ("optionQC", "   [-QC (Non visualizzare avvertenze conflitti modelli)]"),
    ("optionQ", "   [-Q  (Modalità non interattiva)]"),
    ("optionLF", "   [-LF (Utilizza il caricamento riga solo sull'output {valore predefinito: CR/LF})]"),
    ("optionCR", "   [-CR (Utilizza il ritorno a capo solo sull'output {valore predefinito: CR/LF})]"),
    ("optionESCAPE", "   [-ESCAPE (specifica quali caratteri saltare {valore predefinito: <>&\"'\\r\\n}]"),
    ("optionINDENT", "   [-INDENT (Controlla il numero dei rientri {valore predefinito: 0})]"),
    ("optionTT", "   [-TT (Traccia le maschere quando vengono richiamate.)]"),
    ("optionTG", "   [-TG (Traccia ogni evento di generazione.)]"),
    ("optionTS", "   [-TS (Traccia ogni evento di selezione.)]"),
    ("optionTTC", "   [-TTC (Traccia il secondario della maschera quando viene elaborato.)]"),
    ("optionTCLASS", "   [-TCLASS (classe TraceListener per le estensioni di traccia.)]"),
    ("optionVALIDATE", "   [-VALIDATE (Imposta se eseguire la convalida.  Il valore predefinito per la convalida è disattivato.)]"),
    ("optionEDUMP", "   [-EDUMP {nome file facoltativo} (Eseguire stackdump in caso di errori.)]"),
    ("optionXML", "   [-XML (Utilizza la formattazione XML e aggiunge intestazione XML.)]"),
    ("optionTEXT", "   [-TEXT (Utilizza la formattazione Testo semplice.)]"),
    ("optionHTML", "   [-HTML (Utilizza la formattazione HTML.)]"),
    ("optionPARAM", "   [-PARAM nome espressione (imposta un parametro del foglio di stile)]"),
    ("noParsermsg1", "Elaborazione XSL non riuscita."),
    ("noParsermsg2", "** Impossibile trovare il parser **"),
    ("noParsermsg3", "Controllare il classpath."),
    ("noParsermsg4", "Se non si possiede IBM XML Parser per Java, è possibile scaricarlo da"),
    ("noParsermsg5", "IBM AlphaWorks: http://www.alphaworks.ibm.com/formula/xml"),
    ("optionURIRESOLVER", "   [-URIRESOLVER nome classe completo (URIResolver da utilizzare per risolvere gli URI)]"),
    ("optionENTITYRESOLVER", "   [-ENTITYRESOLVER nome classe completo (EntityResolver da utilizzare per risolvere le entità)]"),
    ("optionCONTENTHANDLER", "   [-CONTENTHANDLER nome classe completo (ContentHandler da utilizzare per serializzare l'output)]"),
    ("optionLINENUMBERS", "   [-L utilizza i numeri riga per il documento di origine]"),
    ("optionMEDIA", "   [-MEDIA mediaType (utilizza l'attributo media per individuare il foglio di stile associato ad un documento.)]"),
    ("optionFLAVOR", "   [-FLAVOR flavorName (Utilizza in modo esplicito s2s=SAX oppure d2d=DOM per eseguire la trasformazione.)] "),
    ("optionDIAG", "   [-DIAG (Visualizza il tempo impiegato in millisecondi per la trasformazione.)]"),
    ("optionINCREMENTAL", "   [-INCREMENTAL (richiede la costruzione DTM incrementale impostando http://xml.apache.org/xalan/features/incremental true.)]"),
    ("optionNOOPTIMIMIZE", "   [-NOOPTIMIMIZE (non richiede alcuna elaborazione di ottimizzazione del foglio di stile impostando http://xml.apache.org/xalan/features/optimize false.)]"),
    ("optionRL", "   [-RL recursionlimit (limite numerico asserzioni nella profondità ricorsiva del foglio di stile.)]"),
    ("optionXO", "   [-XO [transletName] (assegna il nome al translet generato)]"),
    ("optionXD", "   [-XD destinationDirectory (specifica una directory di destinazione per il translet)]"),
    ("optionXJ", "   [-XJ jarfile (raggruppa la classi translet in un file jar di nome <jarfile>)]"),
    ("optionXP", "   [-XP package (specifica un prefisso di nome pacchetto per tutte le classi translet generate)]"),
    ("optionXN", "   [-XN (abilita l'allineamento della maschera)]"),
    ("optionXX", "   [-XX (attiva ulteriori emissioni di messaggi di debug)]"),
    ("optionXT", "   [-XT (utilizza il translet per la trasformazione, se possibile)]"),
    ("diagTiming", " --------- La trasformazione di {0} utilizzando {1} ha impiegato {2} ms"),
    ("recursionTooDeep", "Nidificazione della maschera troppo elevata. nesting = {0}, maschera {1} {2}"),
    ("nameIs", "il nome è "),
    ("matchPatternIs", "il modello di corrispondenza è "),
];
